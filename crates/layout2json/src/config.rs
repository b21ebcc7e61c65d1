use std::path::PathBuf;

use blocklayout::config::{DEFAULT_BLOCK_SIZE, DEFAULT_EDGE_DISTANCE, DEFAULT_LEDS_PER_EDGE};
use blocklayout::LayoutConfig;
use clap::Parser;

/// `layout2json` - emits the LED layout of a window of square blocks as JSON.
///
/// Each block carries one LED strip per edge. The layout is written as a single JSON
/// array, one object per LED in controller addressing order, for use as a pixel map
/// and by the 3D pre-visualizer. With no arguments the reference 1x1 window is produced.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Number of LEDs on each edge of a block.
    #[arg(long, env = "LAYOUT_LEDS_PER_EDGE", default_value_t = DEFAULT_LEDS_PER_EDGE)]
    pub leds_per_edge: usize,

    /// Distance from the block center to each edge strip, in block-local units (0, 1].
    #[arg(long, env = "LAYOUT_EDGE_DISTANCE", default_value_t = DEFAULT_EDGE_DISTANCE)]
    pub edge_distance: f64,

    /// Size of one block in scene space.
    #[arg(long, env = "LAYOUT_BLOCK_SIZE", default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: f64,

    /// Width of the window grid, in blocks.
    #[arg(long, env = "LAYOUT_GRID_COLS", default_value_t = 1)]
    pub grid_cols: u32,

    /// Height of the window grid, in blocks.
    #[arg(long, env = "LAYOUT_GRID_ROWS", default_value_t = 1)]
    pub grid_rows: u32,

    /// Write the layout to this file instead of stdout.
    #[arg(long, env = "LAYOUT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON instead of emitting a single line.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

impl Config {
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            leds_per_edge: self.leds_per_edge,
            edge_distance: self.edge_distance,
            block_size: self.block_size,
            grid_cols: self.grid_cols,
            grid_rows: self.grid_rows,
        }
    }
}
