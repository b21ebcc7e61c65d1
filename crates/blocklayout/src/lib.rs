//! Perimeter LED layouts for square blocks arranged in a window grid.
//!
//! Each block carries four LED strips, one per edge. Edges are laid out clockwise
//! starting at local +Y ("north"), and the LEDs of one edge are centered on it with a
//! half-spacing gap at both corners.
//!
//! Every LED is described by one [`LedDescriptor`]:
//!
//!   point      : [f64; 3]  scene-space position, scaled for a 3D pre-visualizer (y = 0)
//!   gridXY     : [i32; 2]  integer address of the owning block in the window grid
//!   blockXY    : [f64; 2]  position in the block's own frame, within [-1, 1]
//!   blockAngle : f64       angle within the block in radians, zero is +Y
//!
//! A [`Layout`] is the ordered sequence of descriptors. The order is the addressing
//! order of the pixel controller:
//!
//!   block 0: edge 0 (north), edge 1 (east), edge 2 (south), edge 3 (west)
//!   block 1: ...
//!
//! Blocks are composed row-major over the window grid.

pub mod block;
pub mod config;
pub mod edge;
pub mod error;
pub mod layout;
pub mod led;

pub use block::{block_leds, EDGES_PER_BLOCK};
pub use config::LayoutConfig;
pub use edge::{edge_angle, edge_leds};
pub use error::{LayoutError, Result};
pub use layout::Layout;
pub use led::{GridXY, LedDescriptor};
