use crate::layout::Cell;
use crate::quad::Uv;
use macroquad::prelude::*;

/// One textured quad produced for a cell: a target rectangle (relative to
/// the draw origin) and its texture coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileQuad {
    /// Target-space rectangle
    pub rect: Rect,
    /// Texture coordinates
    pub uv: Uv,
}

/// Integer scroll phase within one band, always in `[0, len)`.
///
/// Stored offsets are unbounded; the wrap happens only here, so reversing
/// the scroll speed keeps the motion continuous.
#[inline]
fn phase(offset: f32, len: f32) -> f32 {
    if len > 0.0 {
        offset.rem_euclid(len) as i32 as f32
    } else {
        0.0
    }
}

/// Fill a cell's draw rectangle with quads.
///
/// A cell that is not elastic on either axis, or any cell when tiling is
/// disabled, becomes a single stretched quad. Otherwise the cell is covered
/// with source-sized tiles along its elastic axes: a leading partial
/// row/column shows the tail of the tile image so the scroll phase stays
/// continuous, trailing tiles on a tiling axis get their texture window
/// clipped to the leftover space, and on a non-tiling axis the full window
/// is kept and compressed into the leftover space (the fixed-axis
/// stretch/shrink behavior). Quads that would have no area are dropped.
pub fn emit_cell(cell: &Cell, tiling: bool, offset_x: f32, offset_y: f32, out: &mut Vec<TileQuad>) {
    let tile_x = cell.elastic_x;
    let tile_y = cell.elastic_y;
    let Uv { u, v, u2, v2 } = cell.uv;
    let (dw, dh) = (cell.rect.w, cell.rect.h);
    let (len_x, len_y) = (cell.tex.w, cell.tex.h);

    if !tiling || (!tile_x && !tile_y) {
        push(out, cell, 0.0, 0.0, dw, dh, cell.uv);
        return;
    }

    let phase_x = phase(offset_x, len_x);
    let phase_y = phase(offset_y, len_y);

    // texture window of the leading partial column (tail of the tile image)
    let lead_u = u2 - (u2 - u) * phase_x / len_x;
    let lead_u2 = u2.min(u2 - (u2 - u) * (phase_x - dw) / len_x);
    // and of the leading partial row
    let lead_v = v2 - (v2 - v) * phase_y / len_y;
    let lead_v2 = v2.min(v2 - (v2 - v) * (phase_y - dh) / len_y);

    if tile_y {
        if tile_x && phase_x > 0.0 {
            // corner fragment where both leading partials overlap
            let quad_uv = Uv {
                u: lead_u,
                v: lead_v,
                u2: lead_u2,
                v2: lead_v2,
            };
            push(out, cell, 0.0, 0.0, phase_x.min(dw), phase_y.min(dh), quad_uv);
        }

        let mut i = if tile_x { phase_x } else { 0.0 };
        while i < dw && len_x > 0.0 {
            let tail_u2 = if tile_x {
                u2.min(u + (u2 - u) * (dw - i) / len_x)
            } else {
                u2
            };
            let quad_uv = Uv {
                u,
                v: lead_v,
                u2: tail_u2,
                v2: lead_v2,
            };
            push(out, cell, i, 0.0, len_x.min(dw - i), phase_y.min(dh), quad_uv);
            i += len_x;
        }
    }

    let mut j = if tile_y { phase_y } else { 0.0 };
    while j < dh && len_y > 0.0 {
        let tail_v2 = if tile_y {
            v2.min(v + (v2 - v) * (dh - j) / len_y)
        } else {
            v2
        };

        if tile_x && phase_x > 0.0 {
            let quad_uv = Uv {
                u: lead_u,
                v,
                u2: lead_u2,
                v2: tail_v2,
            };
            push(out, cell, 0.0, j, phase_x.min(dw), len_y.min(dh - j), quad_uv);
        }

        let mut i = if tile_x { phase_x } else { 0.0 };
        while i < dw && len_x > 0.0 {
            let tail_u2 = if tile_x {
                u2.min(u + (u2 - u) * (dw - i) / len_x)
            } else {
                u2
            };
            let quad_uv = Uv {
                u,
                v,
                u2: tail_u2,
                v2: tail_v2,
            };
            push(out, cell, i, j, len_x.min(dw - i), len_y.min(dh - j), quad_uv);
            i += len_x;
        }
        j += len_y;
    }
}

#[inline]
fn push(out: &mut Vec<TileQuad>, cell: &Cell, x: f32, y: f32, w: f32, h: f32, uv: Uv) {
    if w > 0.0 && h > 0.0 {
        out.push(TileQuad {
            rect: Rect::new(cell.rect.x + x, cell.rect.y + y, w, h),
            uv,
        });
    }
}
