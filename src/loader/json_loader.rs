use crate::animation::{FrameClip, PlayMode};
use crate::drawable::TenPatchDrawable;
use crate::error::TenPatchError;
use crate::quad::CornerColors;
use crate::region::SourceRegion;
use crate::stretch::StretchAreas;
use anyhow::Context;
use macroquad::prelude::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct JsonPatch {
    texture: String,
    #[serde(default)]
    region: Option<JsonRect>,
    #[serde(default)]
    horizontal_stretch: Vec<i32>,
    #[serde(default)]
    vertical_stretch: Vec<i32>,
    #[serde(default)]
    tiling: bool,
    #[serde(default)]
    smooth: bool,
    #[serde(default)]
    color: Option<[f32; 4]>,
    #[serde(default)]
    corner_colors: Option<JsonCornerColors>,
    #[serde(default)]
    offset_x: f32,
    #[serde(default)]
    offset_y: f32,
    #[serde(default)]
    offset_x_speed: f32,
    #[serde(default)]
    offset_y_speed: f32,
    #[serde(default)]
    min_width: Option<f32>,
    #[serde(default)]
    min_height: Option<f32>,
    #[serde(default)]
    animation: Option<JsonAnimation>,
}

#[derive(Deserialize, Clone, Copy)]
struct JsonRect {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

#[derive(Deserialize)]
struct JsonCornerColors {
    #[serde(default)]
    bottom_left: Option<[f32; 4]>,
    #[serde(default)]
    top_left: Option<[f32; 4]>,
    #[serde(default)]
    top_right: Option<[f32; 4]>,
    #[serde(default)]
    bottom_right: Option<[f32; 4]>,
}

#[derive(Deserialize)]
struct JsonAnimation {
    frames: Vec<JsonRect>,
    frame_duration: f32,
    #[serde(default)]
    play_mode: Option<String>,
}

impl From<JsonRect> for Rect {
    fn from(r: JsonRect) -> Rect {
        Rect::new(r.x, r.y, r.w, r.h)
    }
}

fn color_from(rgba: [f32; 4]) -> Color {
    Color::new(rgba[0], rgba[1], rgba[2], rgba[3])
}

fn play_mode_from(name: &str) -> Result<PlayMode, TenPatchError> {
    match name {
        "normal" => Ok(PlayMode::Normal),
        "reversed" => Ok(PlayMode::Reversed),
        "loop" => Ok(PlayMode::Loop),
        "loop-reversed" => Ok(PlayMode::LoopReversed),
        "loop-pingpong" => Ok(PlayMode::LoopPingPong),
        "loop-random" => Ok(PlayMode::LoopRandom),
        other => Err(TenPatchError::InvalidDefinition(format!(
            "unknown play mode '{other}'"
        ))),
    }
}

/// Animation block of a decoded definition.
pub struct AnimationDef {
    /// Frame rectangles in texture pixels
    pub frames: Vec<Rect>,
    /// Seconds per frame
    pub frame_duration: f32,
    /// Play mode (defaults to loop)
    pub mode: PlayMode,
}

/// A ten-patch definition decoded from JSON, not yet bound to a texture.
pub struct TenPatchDefinition {
    /// Texture path, relative to the definition file
    pub texture: String,
    /// Pixel rectangle within the texture; whole texture when absent
    pub region: Option<Rect>,
    /// Horizontal stretch areas
    pub horizontal: StretchAreas,
    /// Vertical stretch areas
    pub vertical: StretchAreas,
    /// Tile the stretch areas instead of stretching
    pub tiling: bool,
    /// Sample with linear filtering (enables the seam inset)
    pub smooth: bool,
    /// Base tint
    pub color: Color,
    /// Per-corner tint overrides
    pub corners: CornerColors,
    /// Initial tile offsets
    pub offset: (f32, f32),
    /// Tile offset speeds in pixels per second
    pub offset_speed: (f32, f32),
    /// Minimum width hint for layout
    pub min_width: Option<f32>,
    /// Minimum height hint for layout
    pub min_height: Option<f32>,
    /// Optional frame animation
    pub animation: Option<AnimationDef>,
}

impl TenPatchDefinition {
    /// Bind the definition to a loaded texture.
    pub fn into_drawable(self, texture: Texture2D) -> TenPatchDrawable {
        let mut drawable = TenPatchDrawable::default();
        match self.region {
            Some(rect) => drawable.set_texture_region(texture.clone(), rect),
            None => drawable.set_texture(texture.clone()),
        }
        drawable.set_horizontal_stretch_areas(self.horizontal);
        drawable.set_vertical_stretch_areas(self.vertical);
        drawable.set_tiling(self.tiling);
        drawable.set_filter(if self.smooth {
            FilterMode::Linear
        } else {
            FilterMode::Nearest
        });
        drawable.set_color(self.color);
        drawable.set_corner_colors(self.corners);
        drawable.set_offset(self.offset.0, self.offset.1);
        drawable.set_offset_speed(self.offset_speed.0, self.offset_speed.1);
        if let Some(w) = self.min_width {
            drawable.set_min_width(w);
        }
        if let Some(h) = self.min_height {
            drawable.set_min_height(h);
        }
        if let Some(anim) = self.animation {
            let frames = anim
                .frames
                .iter()
                .map(|r| SourceRegion::from_texture_rect(&texture, *r))
                .collect();
            drawable.set_animation(FrameClip::new(frames, anim.frame_duration, anim.mode));
        }
        drawable
    }
}

/// Decode a definition file. Returns the definition and the directory it
/// lives in, against which the texture path is resolved.
pub fn decode_definition_file(path: &str) -> Result<(TenPatchDefinition, PathBuf), TenPatchError> {
    let p = Path::new(path);
    if p.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(TenPatchError::InvalidDefinition(format!(
            "definition must be a JSON file: {path}"
        )));
    }

    let txt = std::fs::read_to_string(p).map_err(|source| TenPatchError::Io {
        path: p.to_path_buf(),
        source,
    })?;
    let j: JsonPatch = serde_json::from_str(&txt).map_err(|source| TenPatchError::Json {
        path: p.to_path_buf(),
        source,
    })?;

    let base_dir = p
        .parent()
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./"));

    let horizontal = StretchAreas::from_flat(&j.horizontal_stretch)?;
    let vertical = StretchAreas::from_flat(&j.vertical_stretch)?;

    let corners = match j.corner_colors {
        Some(c) => CornerColors {
            bottom_left: c.bottom_left.map(color_from),
            top_left: c.top_left.map(color_from),
            top_right: c.top_right.map(color_from),
            bottom_right: c.bottom_right.map(color_from),
        },
        None => CornerColors::default(),
    };

    let animation = match j.animation {
        Some(a) => {
            if a.frames.is_empty() {
                return Err(TenPatchError::InvalidDefinition(
                    "animation needs at least one frame".to_owned(),
                ));
            }
            Some(AnimationDef {
                frames: a.frames.into_iter().map(Rect::from).collect(),
                frame_duration: a.frame_duration,
                mode: match a.play_mode.as_deref() {
                    Some(name) => play_mode_from(name)?,
                    None => PlayMode::Loop,
                },
            })
        }
        None => None,
    };

    Ok((
        TenPatchDefinition {
            texture: j.texture,
            region: j.region.map(Rect::from),
            horizontal,
            vertical,
            tiling: j.tiling,
            smooth: j.smooth,
            color: j.color.map(color_from).unwrap_or(WHITE),
            corners,
            offset: (j.offset_x, j.offset_y),
            offset_speed: (j.offset_x_speed, j.offset_y_speed),
            min_width: j.min_width,
            min_height: j.min_height,
            animation,
        },
        base_dir,
    ))
}

/// Load a definition file and its texture into a ready drawable.
pub async fn load_ten_patch(path: &str) -> anyhow::Result<TenPatchDrawable> {
    let (def, base_dir) = decode_definition_file(path)?;

    let img_path = base_dir.join(&def.texture);
    let tex: Texture2D = load_texture(img_path.to_str().unwrap())
        .await
        .with_context(|| format!("Loading texture {}", def.texture))?;
    tex.set_filter(if def.smooth {
        FilterMode::Linear
    } else {
        FilterMode::Nearest
    });

    Ok(def.into_drawable(tex))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock went backwards")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("mq_tenpatch_{nanos}"));
        fs::create_dir_all(&dir).expect("failed to create temp dir");
        dir
    }

    fn write_and_decode(json: &str) -> Result<(TenPatchDefinition, PathBuf), TenPatchError> {
        let dir = temp_dir();
        let path = dir.join("patch.json");
        fs::write(&path, json).expect("failed to write definition");
        decode_definition_file(path.to_str().expect("path utf8"))
    }

    #[test]
    fn decodes_a_full_definition() {
        let json = r#"{
          "texture": "panel.png",
          "region": {"x": 0, "y": 0, "w": 32, "h": 32},
          "horizontal_stretch": [4, 10, 20, 26],
          "vertical_stretch": [4, 27],
          "tiling": true,
          "smooth": true,
          "color": [1, 1, 1, 0.5],
          "corner_colors": {"top_left": [1, 0, 0, 1]},
          "offset_x_speed": 20,
          "min_width": 12,
          "animation": {
            "frames": [
              {"x": 0, "y": 0, "w": 32, "h": 32},
              {"x": 32, "y": 0, "w": 32, "h": 32}
            ],
            "frame_duration": 0.25,
            "play_mode": "loop-pingpong"
          }
        }"#;

        let (def, _) = write_and_decode(json).expect("decode");
        assert_eq!(def.texture, "panel.png");
        assert_eq!(def.horizontal.pairs(), &[(4, 10), (20, 26)]);
        assert_eq!(def.vertical.pairs(), &[(4, 27)]);
        assert!(def.tiling);
        assert!(def.smooth);
        assert_eq!(def.color.a, 0.5);
        assert_eq!(def.corners.top_left, Some(Color::new(1.0, 0.0, 0.0, 1.0)));
        assert_eq!(def.offset_speed, (20.0, 0.0));
        assert_eq!(def.min_width, Some(12.0));
        let anim = def.animation.expect("animation");
        assert_eq!(anim.frames.len(), 2);
        assert_eq!(anim.mode, PlayMode::LoopPingPong);
    }

    #[test]
    fn defaults_fill_in_for_a_minimal_definition() {
        let json = r#"{ "texture": "panel.png", "horizontal_stretch": [1, 2] }"#;
        let (def, _) = write_and_decode(json).expect("decode");
        assert!(!def.tiling);
        assert!(!def.smooth);
        assert_eq!(def.color, WHITE);
        assert!(def.vertical.is_empty());
        assert!(def.animation.is_none());
    }

    #[test]
    fn odd_stretch_list_is_a_typed_error() {
        let json = r#"{ "texture": "panel.png", "horizontal_stretch": [1, 2, 3] }"#;
        let err = write_and_decode(json).err().expect("expected decode error");
        assert!(matches!(err, TenPatchError::OddStretchValues(3)));
    }

    #[test]
    fn unknown_play_mode_is_a_typed_error() {
        let json = r#"{
          "texture": "panel.png",
          "animation": {
            "frames": [{"x": 0, "y": 0, "w": 8, "h": 8}],
            "frame_duration": 0.1,
            "play_mode": "bounce"
          }
        }"#;
        let err = write_and_decode(json).err().expect("expected decode error");
        assert!(matches!(err, TenPatchError::InvalidDefinition(_)));
    }

    #[test]
    fn empty_animation_is_a_typed_error() {
        let json = r#"{
          "texture": "panel.png",
          "animation": { "frames": [], "frame_duration": 0.1 }
        }"#;
        let err = write_and_decode(json).err().expect("expected decode error");
        assert!(matches!(err, TenPatchError::InvalidDefinition(_)));
    }

    #[test]
    fn malformed_json_is_a_typed_error() {
        let err = write_and_decode("{ not json").err().expect("expected decode error");
        assert!(matches!(err, TenPatchError::Json { .. }));
    }

    #[test]
    fn missing_file_is_a_typed_error() {
        let dir = temp_dir();
        let path = dir.join("missing.json");
        let err = decode_definition_file(path.to_str().expect("path utf8"))
            .err()
            .expect("expected decode error");
        assert!(matches!(err, TenPatchError::Io { .. }));
    }

    #[test]
    fn non_json_extension_is_rejected() {
        let err = decode_definition_file("patch.toml")
            .err()
            .expect("expected decode error");
        assert!(matches!(err, TenPatchError::InvalidDefinition(_)));
    }
}
