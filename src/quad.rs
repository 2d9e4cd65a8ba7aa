use macroquad::models::Vertex;
use macroquad::prelude::*;

/// Normalized texture coordinates of a quad, both edges per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uv {
    /// Left
    pub u: f32,
    /// Top
    pub v: f32,
    /// Right
    pub u2: f32,
    /// Bottom
    pub v2: f32,
}

/// Per-corner tint, each falling back to the base color when unset.
/// Corner order matches vertex emission: bottom-left, top-left, top-right,
/// bottom-right.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CornerColors {
    /// Bottom-left override
    pub bottom_left: Option<Color>,
    /// Top-left override
    pub top_left: Option<Color>,
    /// Top-right override
    pub top_right: Option<Color>,
    /// Bottom-right override
    pub bottom_right: Option<Color>,
}

impl CornerColors {
    /// Resolve the four corners against a base color and multiply each by
    /// the ambient batch color.
    pub fn resolve(&self, base: Color, ambient: Color) -> [Color; 4] {
        [
            mul_colors(self.bottom_left.unwrap_or(base), ambient),
            mul_colors(self.top_left.unwrap_or(base), ambient),
            mul_colors(self.top_right.unwrap_or(base), ambient),
            mul_colors(self.bottom_right.unwrap_or(base), ambient),
        ]
    }
}

/// Component-wise color multiply.
#[inline]
pub fn mul_colors(a: Color, b: Color) -> Color {
    Color::new(a.r * b.r, a.g * b.g, a.b * b.b, a.a * b.a)
}

/// Append one textured quad to the vertex/index buffers.
///
/// Vertices wind bottom-left, top-left, top-right, bottom-right in y-down
/// screen space; `colors` follows the same order and arrives already
/// multiplied by the ambient color. Two triangles are indexed off the
/// current buffer length.
pub fn push_quad(
    vertices: &mut Vec<Vertex>,
    indices: &mut Vec<u16>,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    uv: Uv,
    colors: [Color; 4],
) {
    let base = vertices.len() as u16;
    vertices.push(Vertex::new(x, y + h, 0.0, uv.u, uv.v2, colors[0]));
    vertices.push(Vertex::new(x, y, 0.0, uv.u, uv.v, colors[1]));
    vertices.push(Vertex::new(x + w, y, 0.0, uv.u2, uv.v, colors[2]));
    vertices.push(Vertex::new(x + w, y + h, 0.0, uv.u2, uv.v2, colors[3]));
    indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}
