//! Fill colors handed to the presentation layer.

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Wireframe line color.
pub const LAWN_GREEN: Rgba = Rgba::rgb(124, 252, 0);

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Opaque gray with all three channels set to `level`.
    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }
}
