//! Composes the four edge strips of a block.

use log::debug;

use crate::config::LayoutConfig;
use crate::edge::{edge_angle, edge_leds};
use crate::led::{GridXY, LedDescriptor};

/// A block is bordered by four LED strips.
pub const EDGES_PER_BLOCK: usize = 4;

/// Produces all `4 * leds_per_edge` descriptors of the block at `grid_xy`.
///
/// Edges appear clockwise starting at north (0, -90, -180, -270 degrees); within each
/// edge the order of [`edge_leds`] is kept.
pub fn block_leds(grid_xy: GridXY, config: &LayoutConfig) -> Vec<LedDescriptor> {
    let mut leds = Vec::with_capacity(config.leds_per_block());
    for edge in 0..EDGES_PER_BLOCK {
        leds.extend(edge_leds(grid_xy, edge_angle(edge), config));
    }

    debug!(
        "Block [{}, {}]: {} LEDs on {} edges",
        grid_xy[0],
        grid_xy[1],
        leds.len(),
        EDGES_PER_BLOCK
    );

    leds
}
