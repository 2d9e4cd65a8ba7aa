use macroquad::prelude::*;

/// A sub-rectangle of a texture, in pixels and normalized coordinates.
///
/// Pixel row 0 is the top of the region, matching Macroquad's y-down screen
/// and texture space. The full texture size is carried along for the
/// half-texel seam inset under linear filtering.
///
/// Copyable value: animation swaps regions wholesale between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceRegion {
    /// Region width in pixels
    pub w: f32,
    /// Region height in pixels
    pub h: f32,
    /// Left texture coordinate
    pub u: f32,
    /// Top texture coordinate
    pub v: f32,
    /// Right texture coordinate
    pub u2: f32,
    /// Bottom texture coordinate
    pub v2: f32,
    /// Full texture width in pixels
    pub tex_w: f32,
    /// Full texture height in pixels
    pub tex_h: f32,
}

impl SourceRegion {
    /// Region covering a whole standalone image of the given pixel size.
    pub fn from_size(w: f32, h: f32) -> Self {
        SourceRegion {
            w,
            h,
            u: 0.0,
            v: 0.0,
            u2: 1.0,
            v2: 1.0,
            tex_w: w,
            tex_h: h,
        }
    }

    /// Region for a pixel rectangle inside an atlas of the given size.
    pub fn from_atlas(tex_w: f32, tex_h: f32, rect: Rect) -> Self {
        SourceRegion {
            w: rect.w,
            h: rect.h,
            u: rect.x / tex_w,
            v: rect.y / tex_h,
            u2: (rect.x + rect.w) / tex_w,
            v2: (rect.y + rect.h) / tex_h,
            tex_w,
            tex_h,
        }
    }

    /// Region covering a whole texture.
    pub fn from_texture(tex: &Texture2D) -> Self {
        Self::from_size(tex.width(), tex.height())
    }

    /// Region for a pixel rectangle inside a texture.
    pub fn from_texture_rect(tex: &Texture2D, rect: Rect) -> Self {
        Self::from_atlas(tex.width(), tex.height(), rect)
    }
}
