//! The per-LED record shared with the pixel controller and the pre-visualizer.

use serde::{Deserialize, Serialize};

/// Integer address of a block within the window grid, as `[x, y]`.
pub type GridXY = [i32; 2];

/// One LED of the layout.
///
/// Field names are part of the wire contract and are emitted in camelCase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedDescriptor {
    /// Scene-space position. The height component (`point[1]`) is always zero.
    pub point: [f64; 3],
    /// Address of the owning block.
    #[serde(rename = "gridXY")]
    pub grid_xy: GridXY,
    /// Position in the block's local frame, each component within `[-1, 1]`.
    #[serde(rename = "blockXY")]
    pub block_xy: [f64; 2],
    /// Angle within the block in radians, measured from local +Y.
    pub block_angle: f64,
}
