use crate::quad::Uv;
use crate::region::SourceRegion;
use crate::stretch::StretchAreas;
use macroquad::prelude::*;

/// One span along a single axis: a source pixel range plus the size it
/// occupies in the draw target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSpan {
    /// First source pixel of the span (inclusive lower edge)
    pub tex1: f32,
    /// One past the last source pixel of the span
    pub tex2: f32,
    /// Size of the span in the draw target, clamped at zero
    pub draw: f32,
    /// Whether the span absorbs extra/deficit target space
    pub elastic: bool,
}

impl AxisSpan {
    #[inline]
    fn native(&self) -> f32 {
        self.tex2 - self.tex1
    }
}

/// One grid cell of a planned draw: a target rectangle mapped to a source
/// sub-rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Target-space rectangle, relative to the draw origin
    pub rect: Rect,
    /// Normalized texture coordinates, seam inset already applied
    pub uv: Uv,
    /// Source pixel rectangle within the region
    pub tex: Rect,
    /// Cell lies in a horizontal stretch area
    pub elastic_x: bool,
    /// Cell lies in a vertical stretch area
    pub elastic_y: bool,
}

/// Partition one axis into alternating fixed and elastic spans.
///
/// The sequence always starts and ends with a fixed span; either may be
/// zero-width when a stretch area touches the region edge. Fixed spans keep
/// their native size while the target exceeds the fixed minimum, then shrink
/// in a uniform ratio. Elastic spans share the size delta in proportion to
/// their own native length, so a wide area absorbs more new space than a
/// narrow one. Sizes never go negative; a span may vanish entirely.
pub fn plan_axis(areas: &StretchAreas, extent: f32, target: f32) -> Vec<AxisSpan> {
    let total_stretch = areas.total() as f32;
    let fixed_extent = extent - total_stretch;
    let extra = target.floor() - extent;

    let fixed_size = |native: f32| -> f32 {
        let size = if target > fixed_extent {
            native
        } else if fixed_extent > 0.0 {
            native * target / fixed_extent
        } else {
            0.0
        };
        size.max(0.0)
    };
    let elastic_size =
        |native: f32| -> f32 { (native + extra * native / total_stretch).max(0.0) };

    let mut spans = Vec::with_capacity(areas.pairs().len() * 2 + 1);
    let mut tex1 = 0.0f32;
    for &(start, end) in areas.pairs() {
        let s = start as f32;
        let e = end as f32 + 1.0;
        spans.push(AxisSpan {
            tex1,
            tex2: s,
            draw: fixed_size(s - tex1),
            elastic: false,
        });
        spans.push(AxisSpan {
            tex1: s,
            tex2: e,
            draw: elastic_size(e - s),
            elastic: true,
        });
        tex1 = e;
    }
    spans.push(AxisSpan {
        tex1,
        tex2: extent,
        draw: fixed_size(extent - tex1),
        elastic: false,
    });
    spans
}

/// Cross the two axis partitions into the full cell grid for one draw call.
///
/// Cells are produced row-major, top-down. `smooth` applies the half-texel
/// UV inset on the elastic axes of elastic cells, keeping linear filtering
/// from bleeding fixed-cell pixels into the stretch seam. The inset is
/// computed against the full texture, not the region.
pub fn plan_cells(
    horizontal: &StretchAreas,
    vertical: &StretchAreas,
    region: &SourceRegion,
    width: f32,
    height: f32,
    smooth: bool,
) -> Vec<Cell> {
    let cols = plan_axis(horizontal, region.w, width);
    let rows = plan_axis(vertical, region.h, height);

    let half_texel_u = 0.5 / region.tex_w;
    let half_texel_v = 0.5 / region.tex_h;

    let mut cells = Vec::with_capacity(cols.len() * rows.len());
    let mut origin_y = 0.0f32;
    for row in &rows {
        let mut origin_x = 0.0f32;
        for col in &cols {
            let mut uv = Uv {
                u: region.u + (region.u2 - region.u) * col.tex1 / region.w,
                v: region.v + (region.v2 - region.v) * row.tex1 / region.h,
                u2: region.u + (region.u2 - region.u) * col.tex2 / region.w,
                v2: region.v + (region.v2 - region.v) * row.tex2 / region.h,
            };
            if smooth {
                if col.elastic {
                    uv.u += half_texel_u;
                    uv.u2 -= half_texel_u;
                }
                if row.elastic {
                    uv.v += half_texel_v;
                    uv.v2 -= half_texel_v;
                }
            }
            cells.push(Cell {
                rect: Rect::new(origin_x, origin_y, col.draw, row.draw),
                uv,
                tex: Rect::new(col.tex1, row.tex1, col.native(), row.native()),
                elastic_x: col.elastic,
                elastic_y: row.elastic,
            });
            origin_x += col.draw;
        }
        origin_y += row.draw;
    }
    cells
}
