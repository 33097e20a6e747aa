//! Lobe vertex.

use bytemuck::{Pod, Zeroable};

/// The color of vertices with positive values.
pub const LOBE_COLOR_POSITIVE: [u8; 4] = [255, 0, 0, 255];

/// The color of vertices with non-positive values.
pub const LOBE_COLOR_NEGATIVE: [u8; 4] = [0, 0, 255, 255];

/// A vertex of lobe line strips.
///
/// It is plain old data of 16 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct LobeVertex {
    pub position: [f32; 3],
    pub color_rgba: [u8; 4],
}

impl LobeVertex {
    /// The vertex at `direction * |value|` colored by the sign of `value`.
    #[inline]
    pub fn new(
        direction: &[f32; 3],
        value: f32,
    ) -> Self {
        let radius = value.abs();
        let color_rgba = if value > 0.0 {
            LOBE_COLOR_POSITIVE
        } else {
            LOBE_COLOR_NEGATIVE
        };

        Self {
            position: direction.map(|d| d * radius),
            color_rgba,
        }
    }
}
