//! Geometry parameters for a window of LED blocks.

use crate::error::{LayoutError, Result};
use crate::led::LedDescriptor;

/// LEDs on each edge of the reference block.
pub const DEFAULT_LEDS_PER_EDGE: usize = 10;

/// Perpendicular offset of each edge from the block center, in block-local units.
pub const DEFAULT_EDGE_DISTANCE: f64 = 0.75;

/// Size of one block in scene space, tuned for the pre-visualizer.
pub const DEFAULT_BLOCK_SIZE: f64 = 0.3;

/// Describes the blocks to lay out and how LEDs sit on them.
///
/// `Default` is the reference configuration: a single 1x1 window with ten LEDs per edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Number of LEDs on each of the four edges of a block.
    pub leds_per_edge: usize,
    /// Distance from the block center to each edge strip, in local units.
    ///
    /// Must lie in `(0, 1]` so every LED stays inside the block's `[-1, 1]` frame.
    pub edge_distance: f64,
    /// Physical/visual size of one block. Only used for the scene-space projection.
    pub block_size: f64,
    /// Width of the window grid, in blocks.
    pub grid_cols: u32,
    /// Height of the window grid, in blocks.
    pub grid_rows: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            leds_per_edge: DEFAULT_LEDS_PER_EDGE,
            edge_distance: DEFAULT_EDGE_DISTANCE,
            block_size: DEFAULT_BLOCK_SIZE,
            grid_cols: 1,
            grid_rows: 1,
        }
    }
}

impl LayoutConfig {
    /// Checks every parameter, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.leds_per_edge < 1 {
            return Err(LayoutError::invalid("leds_per_edge", "must be at least 1"));
        }

        if !self.edge_distance.is_finite() {
            return Err(LayoutError::invalid("edge_distance", "must be finite"));
        }
        if self.edge_distance <= 0.0 || self.edge_distance > 1.0 {
            return Err(LayoutError::invalid(
                "edge_distance",
                format!("must lie in (0, 1], got {}", self.edge_distance),
            ));
        }

        if !self.block_size.is_finite() || self.block_size <= 0.0 {
            return Err(LayoutError::invalid(
                "block_size",
                format!("must be finite and positive, got {}", self.block_size),
            ));
        }

        if self.grid_cols < 1 {
            return Err(LayoutError::invalid("grid_cols", "must be at least 1"));
        }
        if self.grid_rows < 1 {
            return Err(LayoutError::invalid("grid_rows", "must be at least 1"));
        }

        // Grid addresses are emitted as i32.
        if i32::try_from(self.grid_cols).is_err() {
            return Err(LayoutError::invalid(
                "grid_cols",
                format!("must not exceed {}, got {}", i32::MAX, self.grid_cols),
            ));
        }
        if i32::try_from(self.grid_rows).is_err() {
            return Err(LayoutError::invalid(
                "grid_rows",
                format!("must not exceed {}, got {}", i32::MAX, self.grid_rows),
            ));
        }

        if self.checked_total_leds().is_none() {
            return Err(LayoutError::invalid(
                "leds_per_edge",
                format!(
                    "{} LEDs per edge on a {}x{} grid is too many LEDs to lay out",
                    self.leds_per_edge, self.grid_cols, self.grid_rows
                ),
            ));
        }

        Ok(())
    }

    /// Even spacing between neighbouring LEDs on one edge.
    ///
    /// The strip is centered on the edge: the outermost LEDs stop one spacing short of
    /// the corners along the strip's own line, so strips on adjoining edges never collide.
    /// The `count + 1` divisor is the established wiring geometry and is kept as-is; it is
    /// not meant to put the end LEDs exactly half a spacing from the corner.
    #[inline]
    pub fn led_spacing(&self) -> f64 {
        2.0 * self.edge_distance / (self.leds_per_edge as f64 + 1.0)
    }

    /// Center of the block in scene space, used to shift the projection.
    #[inline]
    pub fn scene_center(&self) -> (f64, f64) {
        let half = self.block_size * 0.5;
        (half, half)
    }

    #[inline]
    pub fn leds_per_block(&self) -> usize {
        self.leds_per_edge * crate::block::EDGES_PER_BLOCK
    }

    #[inline]
    pub fn block_count(&self) -> usize {
        self.grid_cols as usize * self.grid_rows as usize
    }

    /// Total number of descriptors the whole window produces.
    ///
    /// Only meaningful for a configuration that passed [`LayoutConfig::validate`].
    #[inline]
    pub fn total_leds(&self) -> usize {
        self.leds_per_block() * self.block_count()
    }

    /// Descriptor count, or `None` if it (or the buffer holding it) cannot be addressed.
    fn checked_total_leds(&self) -> Option<usize> {
        let per_block = self
            .leds_per_edge
            .checked_mul(crate::block::EDGES_PER_BLOCK)?;
        let blocks = usize::try_from(self.grid_cols)
            .ok()?
            .checked_mul(usize::try_from(self.grid_rows).ok()?)?;
        let total = per_block.checked_mul(blocks)?;

        let bytes = total.checked_mul(std::mem::size_of::<LedDescriptor>())?;
        (bytes <= isize::MAX as usize).then_some(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_reference_configuration() {
        let config = LayoutConfig::default();
        assert_eq!(config.leds_per_edge, 10);
        assert_eq!(config.edge_distance, 0.75);
        assert_eq!(config.block_size, 0.3);
        assert_eq!(config.block_count(), 1);
        assert_eq!(config.total_leds(), 40);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn spacing_centers_strip_on_edge() {
        let config = LayoutConfig::default();
        let spacing = config.led_spacing();
        assert!((spacing - 1.5 / 11.0).abs() < 1e-12);

        // Outermost LED stops one spacing short of the corner at +/- edge_distance.
        let outermost = (config.leds_per_edge as f64 - 1.0) / 2.0 * spacing;
        assert!((config.edge_distance - outermost - spacing).abs() < 1e-12);
    }

    #[test]
    fn rejects_zero_leds() {
        let config = LayoutConfig {
            leds_per_edge: 0,
            ..LayoutConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LayoutError::InvalidConfiguration {
                field: "leds_per_edge",
                ..
            })
        ));
    }

    #[test]
    fn rejects_non_finite_and_out_of_range_distance() {
        for distance in [f64::NAN, f64::INFINITY, 0.0, -0.5, 1.5] {
            let config = LayoutConfig {
                edge_distance: distance,
                ..LayoutConfig::default()
            };
            let err = config.validate().unwrap_err();
            assert!(
                matches!(
                    err,
                    LayoutError::InvalidConfiguration {
                        field: "edge_distance",
                        ..
                    }
                ),
                "distance {distance} gave {err:?}"
            );
        }
    }

    #[test]
    fn rejects_bad_block_size_and_empty_grid() {
        let config = LayoutConfig {
            block_size: f64::NEG_INFINITY,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LayoutConfig {
            grid_cols: 0,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LayoutConfig {
            grid_rows: 0,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_grid_dimensions_beyond_i32() {
        let config = LayoutConfig {
            grid_cols: 3_000_000_000,
            ..LayoutConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LayoutError::InvalidConfiguration {
                field: "grid_cols",
                ..
            })
        ));

        let config = LayoutConfig {
            grid_rows: i32::MAX as u32 + 1,
            ..LayoutConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LayoutError::InvalidConfiguration {
                field: "grid_rows",
                ..
            })
        ));

        let config = LayoutConfig {
            grid_cols: i32::MAX as u32,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_leds_per_block_overflow() {
        let config = LayoutConfig {
            leds_per_edge: usize::MAX / 2,
            ..LayoutConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LayoutError::InvalidConfiguration {
                field: "leds_per_edge",
                ..
            })
        ));
    }

    #[test]
    fn rejects_total_led_overflow() {
        // Four edges per block still fit, the whole window does not.
        let config = LayoutConfig {
            leds_per_edge: usize::MAX / 8,
            grid_cols: 4,
            ..LayoutConfig::default()
        };
        assert!(config.leds_per_edge.checked_mul(4).is_some());
        assert!(config.validate().is_err());

        // Fits in usize but not in one buffer.
        let config = LayoutConfig {
            leds_per_edge: usize::MAX / 16,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn error_message_names_the_field() {
        let err = LayoutConfig {
            leds_per_edge: 0,
            ..LayoutConfig::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: `leds_per_edge` must be at least 1"
        );
    }
}
