// tests/drawable_tests.rs

use macroquad::models::Vertex;
use macroquad::prelude::*;
use macroquad_tenpatch::{
    CornerColors, FrameClip, PlayMode, SourceRegion, StretchAreas, TenPatchDrawable, TenPatchError,
};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn emit(d: &TenPatchDrawable, w: f32, h: f32) -> Result<(Vec<Vertex>, Vec<u16>), TenPatchError> {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    d.emit(0.0, 0.0, w, h, WHITE, &mut vertices, &mut indices)?;
    Ok((vertices, indices))
}

#[test]
fn unset_stretch_areas_fail_at_draw_not_construction() {
    let mut d = TenPatchDrawable::default();
    d.set_source_region(SourceRegion::from_size(10.0, 10.0));
    let err = emit(&d, 10.0, 10.0).unwrap_err();
    assert!(matches!(err, TenPatchError::StretchAreasUnset(_)));
}

#[test]
fn unset_region_fails_at_draw() {
    let mut d = TenPatchDrawable::default();
    d.set_horizontal_stretch_areas(StretchAreas::from_flat(&[0, 2]).unwrap());
    d.set_vertical_stretch_areas(StretchAreas::from_flat(&[0, 2]).unwrap());
    assert!(matches!(
        emit(&d, 10.0, 10.0).unwrap_err(),
        TenPatchError::RegionUnset
    ));
}

#[test]
fn bad_areas_fail_on_every_draw_call() {
    // descending pair: accepted at assignment, rejected by each draw
    let mut d = TenPatchDrawable::default();
    d.set_source_region(SourceRegion::from_size(10.0, 10.0));
    d.set_horizontal_stretch_areas(StretchAreas::from_pairs(vec![(5, 3)]));
    d.set_vertical_stretch_areas(StretchAreas::from_flat(&[]).unwrap());
    for _ in 0..2 {
        assert!(matches!(
            emit(&d, 10.0, 10.0).unwrap_err(),
            TenPatchError::StretchNotAscending { .. }
        ));
    }

    // out-of-range value: same contract
    d.set_horizontal_stretch_areas(StretchAreas::from_pairs(vec![(0, 10)]));
    for _ in 0..2 {
        assert!(matches!(
            emit(&d, 10.0, 10.0).unwrap_err(),
            TenPatchError::StretchOutOfRange { .. }
        ));
    }
}

#[test]
fn region_swap_can_invalidate_previously_good_areas() {
    let mut d = TenPatchDrawable::default();
    d.set_source_region(SourceRegion::from_size(32.0, 32.0));
    d.set_horizontal_stretch_areas(StretchAreas::from_flat(&[8, 23]).unwrap());
    d.set_vertical_stretch_areas(StretchAreas::from_flat(&[]).unwrap());
    assert!(emit(&d, 32.0, 32.0).is_ok());

    // a smaller frame makes the same areas out of range
    d.set_source_region(SourceRegion::from_size(16.0, 16.0));
    assert!(matches!(
        emit(&d, 32.0, 32.0).unwrap_err(),
        TenPatchError::StretchOutOfRange { .. }
    ));
}

#[test]
fn native_draw_covers_the_target_exactly() {
    let mut d = TenPatchDrawable::default();
    d.set_source_region(SourceRegion::from_size(10.0, 10.0));
    d.set_horizontal_stretch_areas(StretchAreas::from_flat(&[0, 2]).unwrap());
    d.set_vertical_stretch_areas(StretchAreas::from_flat(&[0, 2]).unwrap());

    let (vertices, indices) = emit(&d, 10.0, 10.0).unwrap();
    // zero-area cells emit nothing; the 2x2 non-empty cells remain
    assert_eq!(vertices.len(), 16);
    assert_eq!(indices.len(), 24);

    let area: f32 = vertices
        .chunks(4)
        .map(|q| {
            let w = q[2].position.x - q[1].position.x;
            let h = q[0].position.y - q[1].position.y;
            w * h
        })
        .sum();
    assert!(close(area, 100.0));
}

#[test]
fn offsets_accumulate_unwrapped_and_phase_wraps_at_draw() {
    let mut d = TenPatchDrawable::default();
    d.set_source_region(SourceRegion::from_size(20.0, 8.0));
    d.set_horizontal_stretch_areas(StretchAreas::from_flat(&[2, 17]).unwrap());
    d.set_vertical_stretch_areas(StretchAreas::from_flat(&[]).unwrap());
    d.set_tiling(true);
    d.set_offset_x_speed(20.0);

    d.update(1.0);
    d.update(1.0);
    assert!(close(d.offset_x(), 40.0));

    // band is 16px, so the rendered phase is 40 % 16 = 8: the elastic cell
    // leads with an 8px partial tile
    let (vertices, _) = emit(&d, 40.0, 8.0).unwrap();
    // quads: left fixed cell, then the elastic cell's tiles
    let lead_x = vertices[5].position.x;
    let lead_w = vertices[6].position.x - vertices[5].position.x;
    assert!(close(lead_x, 2.0));
    assert!(close(lead_w, 8.0));
}

#[test]
fn corner_colors_multiply_with_the_ambient_color() {
    let red = Color::new(1.0, 0.0, 0.0, 1.0);
    let green = Color::new(0.0, 1.0, 0.0, 1.0);
    let blue = Color::new(0.0, 0.0, 1.0, 1.0);

    let mut d = TenPatchDrawable::default();
    d.set_source_region(SourceRegion::from_size(4.0, 4.0));
    d.set_horizontal_stretch_areas(StretchAreas::from_flat(&[]).unwrap());
    d.set_vertical_stretch_areas(StretchAreas::from_flat(&[]).unwrap());
    d.set_corner_colors(CornerColors {
        bottom_left: Some(WHITE),
        top_left: Some(red),
        top_right: Some(green),
        bottom_right: Some(blue),
    });

    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    d.emit(0.0, 0.0, 4.0, 4.0, red, &mut vertices, &mut indices)
        .unwrap();

    let expect = |c: Color| Vertex::new(0.0, 0.0, 0.0, 0.0, 0.0, c).color;
    assert_eq!(vertices[0].color, expect(red));
    assert_eq!(vertices[1].color, expect(red));
    assert_eq!(vertices[2].color, expect(Color::new(0.0, 0.0, 0.0, 1.0)));
    assert_eq!(vertices[3].color, expect(Color::new(0.0, 0.0, 0.0, 1.0)));
}

#[test]
fn animation_swaps_frames_and_keeps_min_size_hints() {
    let frames: Vec<SourceRegion> = (1..=4)
        .map(|i| SourceRegion::from_size(8.0 * i as f32, 8.0))
        .collect();

    let mut d = TenPatchDrawable::default();
    d.set_horizontal_stretch_areas(StretchAreas::from_flat(&[0, 3]).unwrap());
    d.set_vertical_stretch_areas(StretchAreas::from_flat(&[]).unwrap());
    d.set_animation(FrameClip::new(frames, 0.25, PlayMode::LoopPingPong));
    d.set_min_width(50.0);

    let mut widths = Vec::new();
    for _ in 0..8 {
        d.update(0.25);
        widths.push(d.source_region().unwrap().w);
    }
    // pingpong over frame widths 8,16,24,32 starting after the first tick
    assert_eq!(
        widths,
        vec![16.0, 24.0, 32.0, 24.0, 16.0, 8.0, 16.0, 24.0]
    );
    // the hint survives every swap
    assert!(close(d.min_width(), 50.0));
}

#[test]
fn restart_resets_time_only() {
    let mut d = TenPatchDrawable::default();
    d.set_offset_x_speed(10.0);
    d.update(2.0);
    assert!(close(d.time(), 2.0));
    assert!(close(d.offset_x(), 20.0));

    d.restart();
    assert!(close(d.time(), 0.0));
    // offsets and speeds are untouched
    assert!(close(d.offset_x(), 20.0));
    assert!(close(d.offset_x_speed(), 10.0));
}

#[test]
fn computed_min_size_is_the_fixed_extent() {
    let mut d = TenPatchDrawable::default();
    d.set_source_region(SourceRegion::from_size(10.0, 12.0));
    d.set_horizontal_stretch_areas(StretchAreas::from_flat(&[0, 2]).unwrap());
    d.set_vertical_stretch_areas(StretchAreas::from_flat(&[2, 5, 8, 9]).unwrap());
    assert!(close(d.min_width(), 7.0));
    assert!(close(d.min_height(), 6.0));
}

#[test]
fn transformed_draw_is_unsupported() {
    let d = TenPatchDrawable::default();
    let err = d
        .draw_transformed(0.0, 0.0, 5.0, 5.0, 10.0, 10.0, 2.0, 2.0, 45.0)
        .unwrap_err();
    assert!(matches!(err, TenPatchError::Unsupported));
}

#[test]
fn tint_changes_only_the_base_color() {
    let red = Color::new(1.0, 0.0, 0.0, 1.0);
    let mut d = TenPatchDrawable::default();
    d.set_corner_colors(CornerColors {
        top_left: Some(WHITE),
        ..Default::default()
    });
    let tinted = d.tint(red);
    assert_eq!(tinted.color(), red);
    assert_eq!(tinted.corner_colors().top_left, Some(WHITE));
    assert_eq!(d.color(), WHITE);
}
