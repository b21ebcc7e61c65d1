//! Lays out the LED strip along one edge of a block.
//!
//! An edge is first built in an un-rotated local frame where the strip runs along the
//! x-axis at `y = edge_distance` ("north"), then rotated into place and projected into
//! scene space.

use std::f64::consts::FRAC_PI_2;

use glam::{DVec2, DVec3};

use crate::config::LayoutConfig;
use crate::led::{GridXY, LedDescriptor};

/// Rotation of edge `edge` relative to the block frame. Edges run clockwise from north.
#[inline]
pub fn edge_angle(edge: usize) -> f64 {
    edge as f64 * -FRAC_PI_2
}

/// Produces the `leds_per_edge` descriptors of one edge, ordered by increasing offset
/// along the edge's local x-axis.
pub fn edge_leds(grid_xy: GridXY, angle: f64, config: &LayoutConfig) -> Vec<LedDescriptor> {
    let count = config.leds_per_edge;
    let distance = config.edge_distance;
    let spacing = config.led_spacing();
    let middle = (count as f64 - 1.0) / 2.0;

    // One sin/cos per edge, shared by every LED on it.
    let rotation = DVec2::from_angle(angle);

    (0..count)
        .map(|i| {
            let x = (i as f64 - middle) * spacing;
            let rotated = rotation.rotate(DVec2::new(x, distance));
            let point = project_to_scene(grid_xy, rotated, config);

            LedDescriptor {
                point: point.to_array(),
                grid_xy,
                block_xy: rotated.to_array(),
                // x first: the angle is measured from +Y, not +X.
                block_angle: rotated.x.atan2(rotated.y),
            }
        })
        .collect()
}

/// Maps a block-local position into the shared scene.
///
/// The block frame's `[-1, 1]` extent covers one `block_size` cell; grid x and y run
/// along negative scene X and Z. Height is always zero.
#[inline]
fn project_to_scene(grid_xy: GridXY, block_xy: DVec2, config: &LayoutConfig) -> DVec3 {
    let size = config.block_size;
    let (center_x, center_y) = config.scene_center();
    let gx = f64::from(grid_xy[0]);
    let gy = f64::from(grid_xy[1]);

    DVec3::new(
        size * -(gx + block_xy.x * 0.5 + 0.5) + center_x,
        0.0,
        size * -(gy - block_xy.y * 0.5 + 0.5) + center_y,
    )
}
