use crate::animation::FrameClip;
use crate::error::TenPatchError;
use crate::layout::plan_cells;
use crate::quad::{push_quad, CornerColors};
use crate::region::SourceRegion;
use crate::stretch::{Axis, StretchAreas};
use crate::tile::emit_cell;
use macroquad::models::{draw_mesh, Mesh, Vertex};
use macroquad::prelude::*;

/// Multi-region stretch/tile drawable.
///
/// A generalization of 9-patch: any number of stretch areas per axis, each
/// optionally tiled instead of stretched, with scrolling tile offsets,
/// per-corner tinting and optional frame animation. All state is owned by
/// the instance except the texture, which is a shared read-only handle.
///
/// Call [`update`](Self::update) once per frame before
/// [`draw`](Self::draw). Stretch areas and a region must be assigned before
/// the first draw; both are re-validated against the current region on
/// every call, since animation may swap regions while the areas stay fixed.
#[derive(Clone)]
pub struct TenPatchDrawable {
    texture: Option<Texture2D>,
    region: Option<SourceRegion>,
    horizontal: Option<StretchAreas>,
    vertical: Option<StretchAreas>,
    tiling: bool,
    filter: FilterMode,
    offset_x: f32,
    offset_y: f32,
    offset_x_speed: f32,
    offset_y_speed: f32,
    time: f32,
    color: Color,
    corners: CornerColors,
    clip: Option<FrameClip>,
    min_width: Option<f32>,
    min_height: Option<f32>,
}

impl Default for TenPatchDrawable {
    /// Empty drawable for the deserialization path. Stretch areas and a
    /// texture region must be assigned before the first draw.
    fn default() -> Self {
        TenPatchDrawable {
            texture: None,
            region: None,
            horizontal: None,
            vertical: None,
            tiling: false,
            filter: FilterMode::Nearest,
            offset_x: 0.0,
            offset_y: 0.0,
            offset_x_speed: 0.0,
            offset_y_speed: 0.0,
            time: 0.0,
            color: WHITE,
            corners: CornerColors::default(),
            clip: None,
            min_width: None,
            min_height: None,
        }
    }
}

impl TenPatchDrawable {
    /// Drawable over a whole texture with the given stretch areas.
    pub fn new(
        horizontal: StretchAreas,
        vertical: StretchAreas,
        tiling: bool,
        texture: Texture2D,
    ) -> Self {
        let region = SourceRegion::from_texture(&texture);
        TenPatchDrawable {
            texture: Some(texture),
            region: Some(region),
            horizontal: Some(horizontal),
            vertical: Some(vertical),
            tiling,
            ..Default::default()
        }
    }

    /// Advance scroll offsets and, when animated, the active frame.
    ///
    /// A frame swap replaces only the source region; configured minimum-size
    /// hints survive, so host layout does not jitter between frames of
    /// differing native size.
    pub fn update(&mut self, delta: f32) {
        self.time += delta;
        self.offset_x += self.offset_x_speed * delta;
        self.offset_y += self.offset_y_speed * delta;

        if let Some(clip) = &mut self.clip {
            if let Some(region) = clip.frame_at(self.time) {
                self.region = Some(region);
            }
        }
    }

    /// Generate the quads for one draw call into caller-owned buffers.
    ///
    /// This is the whole draw path minus the mesh submission; `draw` wraps
    /// it. Fails when stretch areas or the region are unset, or when the
    /// areas do not fit the current region.
    pub fn emit(
        &self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        ambient: Color,
        vertices: &mut Vec<Vertex>,
        indices: &mut Vec<u16>,
    ) -> Result<(), TenPatchError> {
        let region = self.region.ok_or(TenPatchError::RegionUnset)?;
        let horizontal = self
            .horizontal
            .as_ref()
            .ok_or(TenPatchError::StretchAreasUnset(Axis::Horizontal))?;
        let vertical = self
            .vertical
            .as_ref()
            .ok_or(TenPatchError::StretchAreasUnset(Axis::Vertical))?;
        horizontal.validate(region.w as u32, Axis::Horizontal)?;
        vertical.validate(region.h as u32, Axis::Vertical)?;

        let smooth = self.filter == FilterMode::Linear;
        let cells = plan_cells(horizontal, vertical, &region, width, height, smooth);
        let colors = self.corners.resolve(self.color, ambient);

        let mut quads = Vec::new();
        for cell in &cells {
            emit_cell(cell, self.tiling, self.offset_x, self.offset_y, &mut quads);
        }
        for quad in &quads {
            push_quad(
                vertices,
                indices,
                x + quad.rect.x,
                y + quad.rect.y,
                quad.rect.w,
                quad.rect.h,
                quad.uv,
                colors,
            );
        }
        Ok(())
    }

    /// Draw at the given target rectangle.
    pub fn draw(&self, x: f32, y: f32, width: f32, height: f32) -> Result<(), TenPatchError> {
        self.draw_tinted(x, y, width, height, WHITE)
    }

    /// Draw with an ambient color multiplied into every vertex color.
    pub fn draw_tinted(
        &self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        ambient: Color,
    ) -> Result<(), TenPatchError> {
        let texture = self.texture.as_ref().ok_or(TenPatchError::RegionUnset)?;
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        self.emit(x, y, width, height, ambient, &mut vertices, &mut indices)?;
        draw_mesh(&Mesh {
            vertices,
            indices,
            texture: Some(texture.clone()),
        });
        Ok(())
    }

    /// Rotated/scaled drawing inherited from conventional drawables.
    /// Always fails: silently dropping the rotation would be worse.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_transformed(
        &self,
        _x: f32,
        _y: f32,
        _origin_x: f32,
        _origin_y: f32,
        _width: f32,
        _height: f32,
        _scale_x: f32,
        _scale_y: f32,
        _rotation: f32,
    ) -> Result<(), TenPatchError> {
        Err(TenPatchError::Unsupported)
    }

    /// Duplicate this drawable with a different base color.
    pub fn tint(&self, color: Color) -> Self {
        let mut copy = self.clone();
        copy.color = color;
        copy
    }

    /// Reset the animation clock without touching mode, speed or offsets.
    pub fn restart(&mut self) {
        self.time = 0.0;
    }

    /// Accumulated animation time in seconds.
    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    // --- texture & region ---

    /// Replace the texture and cover it whole.
    pub fn set_texture(&mut self, texture: Texture2D) {
        self.region = Some(SourceRegion::from_texture(&texture));
        self.texture = Some(texture);
    }

    /// Replace the texture and use the given pixel rectangle of it.
    pub fn set_texture_region(&mut self, texture: Texture2D, rect: Rect) {
        self.region = Some(SourceRegion::from_texture_rect(&texture, rect));
        self.texture = Some(texture);
    }

    /// Replace just the source region, keeping the texture handle.
    pub fn set_source_region(&mut self, region: SourceRegion) {
        self.region = Some(region);
    }

    /// The texture currently drawn from, if any.
    pub fn texture(&self) -> Option<&Texture2D> {
        self.texture.as_ref()
    }

    /// The active source region, if any.
    pub fn source_region(&self) -> Option<SourceRegion> {
        self.region
    }

    // --- stretch areas & tiling ---

    /// Assign the horizontal stretch areas. Values are checked against the
    /// current region inside every draw, not here.
    pub fn set_horizontal_stretch_areas(&mut self, areas: StretchAreas) {
        self.horizontal = Some(areas);
    }

    /// Assign the vertical stretch areas.
    pub fn set_vertical_stretch_areas(&mut self, areas: StretchAreas) {
        self.vertical = Some(areas);
    }

    /// The horizontal stretch areas, if assigned.
    pub fn horizontal_stretch_areas(&self) -> Option<&StretchAreas> {
        self.horizontal.as_ref()
    }

    /// The vertical stretch areas, if assigned.
    pub fn vertical_stretch_areas(&self) -> Option<&StretchAreas> {
        self.vertical.as_ref()
    }

    /// Tile the stretch areas instead of stretching them.
    pub fn set_tiling(&mut self, tiling: bool) {
        self.tiling = tiling;
    }

    /// Whether stretch areas tile instead of stretching.
    #[inline]
    pub fn is_tiling(&self) -> bool {
        self.tiling
    }

    /// Record the filter mode the texture is sampled with. Under
    /// `FilterMode::Linear` the stretch seams get a half-texel UV inset.
    /// The texture itself is never touched.
    pub fn set_filter(&mut self, filter: FilterMode) {
        self.filter = filter;
    }

    /// The recorded filter mode.
    #[inline]
    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    // --- scrolling offsets ---

    /// Horizontal tile offset in pixels. Unbounded; wrapped per band only
    /// at draw time.
    #[inline]
    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    /// Vertical tile offset in pixels.
    #[inline]
    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    /// Set the horizontal tile offset. Only visible while tiling.
    pub fn set_offset_x(&mut self, offset_x: f32) {
        self.offset_x = offset_x;
    }

    /// Set the vertical tile offset. Only visible while tiling.
    pub fn set_offset_y(&mut self, offset_y: f32) {
        self.offset_y = offset_y;
    }

    /// Set both tile offsets.
    pub fn set_offset(&mut self, offset_x: f32, offset_y: f32) {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
    }

    /// Horizontal offset speed in pixels per second, applied by `update`.
    #[inline]
    pub fn offset_x_speed(&self) -> f32 {
        self.offset_x_speed
    }

    /// Vertical offset speed in pixels per second.
    #[inline]
    pub fn offset_y_speed(&self) -> f32 {
        self.offset_y_speed
    }

    /// Set the horizontal offset speed.
    pub fn set_offset_x_speed(&mut self, speed: f32) {
        self.offset_x_speed = speed;
    }

    /// Set the vertical offset speed.
    pub fn set_offset_y_speed(&mut self, speed: f32) {
        self.offset_y_speed = speed;
    }

    /// Set both offset speeds.
    pub fn set_offset_speed(&mut self, x_speed: f32, y_speed: f32) {
        self.offset_x_speed = x_speed;
        self.offset_y_speed = y_speed;
    }

    // --- colors ---

    /// Base tint color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the base tint color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Per-corner color overrides.
    #[inline]
    pub fn corner_colors(&self) -> &CornerColors {
        &self.corners
    }

    /// Set the per-corner color overrides; unset corners use the base
    /// color. Useful for gradients.
    pub fn set_corner_colors(&mut self, corners: CornerColors) {
        self.corners = corners;
    }

    // --- animation ---

    /// Animate the drawable with a frame clip. The same stretch areas apply
    /// to every frame.
    pub fn set_animation(&mut self, clip: FrameClip) {
        self.clip = Some(clip);
    }

    /// Stop animating; the current region stays.
    pub fn clear_animation(&mut self) {
        self.clip = None;
    }

    /// The frame clip, if animated.
    pub fn animation(&self) -> Option<&FrameClip> {
        self.clip.as_ref()
    }

    /// Mutable access to the frame clip, e.g. to change the play mode.
    pub fn animation_mut(&mut self) -> Option<&mut FrameClip> {
        self.clip.as_mut()
    }

    // --- layout hints ---

    /// Minimum sensible width: the configured hint, else the summed native
    /// width of the fixed areas of the current region.
    pub fn min_width(&self) -> f32 {
        if let Some(hint) = self.min_width {
            return hint;
        }
        match (&self.region, &self.horizontal) {
            (Some(region), Some(areas)) => (region.w - areas.total() as f32).max(0.0),
            (Some(region), None) => region.w,
            _ => 0.0,
        }
    }

    /// Minimum sensible height, analogous to [`min_width`](Self::min_width).
    pub fn min_height(&self) -> f32 {
        if let Some(hint) = self.min_height {
            return hint;
        }
        match (&self.region, &self.vertical) {
            (Some(region), Some(areas)) => (region.h - areas.total() as f32).max(0.0),
            (Some(region), None) => region.h,
            _ => 0.0,
        }
    }

    /// Pin the minimum width reported to layout, regardless of the frame.
    pub fn set_min_width(&mut self, min_width: f32) {
        self.min_width = Some(min_width);
    }

    /// Pin the minimum height reported to layout.
    pub fn set_min_height(&mut self, min_height: f32) {
        self.min_height = Some(min_height);
    }
}
