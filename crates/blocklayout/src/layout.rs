//! The full ordered layout of a window and its serialized form.

use std::io::Write;
use std::ops::Range;

use log::{debug, info};
use rayon::prelude::*;

use crate::block::{block_leds, EDGES_PER_BLOCK};
use crate::config::LayoutConfig;
use crate::edge::{edge_angle, edge_leds};
use crate::error::Result;
use crate::led::{GridXY, LedDescriptor};

/// Ordered sequence of LED descriptors. Index `i` is the controller's pixel `i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    leds: Vec<LedDescriptor>,
}

impl Layout {
    /// Empty buffer with room for `capacity` descriptors.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            leds: Vec::with_capacity(capacity),
        }
    }

    /// Builds the whole window described by `config`.
    ///
    /// The configuration is validated first; on error nothing is generated. Blocks are
    /// generated in parallel but placed row-major, so the result is identical to
    /// [`Layout::generate_sequential`].
    pub fn generate(config: &LayoutConfig) -> Result<Self> {
        config.validate()?;

        let addresses = grid_addresses(config);
        let blocks: Vec<Vec<LedDescriptor>> = addresses
            .par_iter()
            .map(|&grid_xy| block_leds(grid_xy, config))
            .collect();

        let mut layout = Self::with_capacity(config.total_leds());
        for block in blocks {
            layout.leds.extend(block);
        }

        info!(
            "Generated {} LEDs for a {}x{} window",
            layout.len(),
            config.grid_cols,
            config.grid_rows
        );

        Ok(layout)
    }

    /// Builds the window one block at a time, writing each at its start index.
    pub fn generate_sequential(config: &LayoutConfig) -> Result<Self> {
        config.validate()?;

        let mut layout = Self::with_capacity(config.total_leds());
        for (ordinal, grid_xy) in grid_addresses(config).into_iter().enumerate() {
            layout.write_block(ordinal * config.leds_per_block(), grid_xy, config);
        }

        Ok(layout)
    }

    /// Writes one edge strip at `start_index..start_index + leds_per_edge`, growing the
    /// buffer if needed and overwriting whatever was there.
    pub fn write_edge(
        &mut self,
        start_index: usize,
        grid_xy: GridXY,
        angle: f64,
        config: &LayoutConfig,
    ) {
        let leds = edge_leds(grid_xy, angle, config);
        self.write_at(start_index, &leds);
    }

    /// Writes the four edges of a block starting at `start_index`.
    ///
    /// Edge `e` lands at `start_index + e * leds_per_edge`. Callers laying out several
    /// blocks pick non-overlapping start indices.
    pub fn write_block(&mut self, start_index: usize, grid_xy: GridXY, config: &LayoutConfig) {
        for edge in 0..EDGES_PER_BLOCK {
            self.write_edge(
                start_index + edge * config.leds_per_edge,
                grid_xy,
                edge_angle(edge),
                config,
            );
        }
    }

    fn write_at(&mut self, start_index: usize, leds: &[LedDescriptor]) {
        let end = start_index + leds.len();
        if self.leds.len() < end {
            self.leds.resize(end, LedDescriptor::default());
        }
        self.leds[start_index..end].copy_from_slice(leds);
    }

    /// Index range of the `ordinal`-th block when blocks are laid out back to back.
    pub fn block_span(ordinal: usize, config: &LayoutConfig) -> Range<usize> {
        let start = ordinal * config.leds_per_block();
        start..start + config.leds_per_block()
    }

    pub fn leds(&self) -> &[LedDescriptor] {
        &self.leds
    }

    pub fn len(&self) -> usize {
        self.leds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }

    pub fn into_leds(self) -> Vec<LedDescriptor> {
        self.leds
    }

    /// The layout as one line of JSON: an array of descriptor objects.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.leds)
    }

    /// Streams the compact JSON array into `writer`, without a trailing newline.
    pub fn write_json<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        debug!("Serializing {} LEDs", self.len());
        serde_json::to_writer(writer, &self.leds)
    }

    pub fn write_json_pretty<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, &self.leds)
    }
}

/// Grid addresses of every block, row-major: all of row 0 first, then row 1, ...
fn grid_addresses(config: &LayoutConfig) -> Vec<GridXY> {
    (0..config.grid_rows as i32)
        .flat_map(|y| (0..config.grid_cols as i32).map(move |x| [x, y]))
        .collect()
}
