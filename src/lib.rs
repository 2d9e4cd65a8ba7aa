#![warn(missing_docs)]

//! Multi-region stretch & tile (ten-patch) drawable for Macroquad.
//!
//! Classic 9-patch allows one stretchable area per axis; a ten-patch allows
//! any number, each optionally tiled with a scrolling offset, plus corner
//! color gradients and frame animation. Build a [`TenPatchDrawable`] in
//! code or load one from a JSON definition, call `update(dt)` once per
//! frame and `draw(x, y, w, h)` to render.

mod animation;
mod drawable;
mod error;
mod layout;
mod loader {
    pub mod json_loader;
}
mod quad;
mod region;
mod stretch;
mod tile;

pub use animation::{FrameClip, PlayMode};
pub use drawable::TenPatchDrawable;
pub use error::TenPatchError;
pub use layout::{plan_axis, plan_cells, AxisSpan, Cell};
pub use loader::json_loader::{
    decode_definition_file, load_ten_patch, AnimationDef, TenPatchDefinition,
};
pub use quad::{mul_colors, push_quad, CornerColors, Uv};
pub use region::SourceRegion;
pub use stretch::{Axis, StretchAreas};
pub use tile::{emit_cell, TileQuad};
