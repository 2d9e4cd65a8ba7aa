use macroquad::prelude::*;
use macroquad_tenpatch::{StretchAreas, TenPatchDrawable};

fn window_conf() -> Conf {
    Conf {
        window_title: "Ten-Patch Demo".into(),
        window_width: 1280,
        window_height: 720,
        ..Default::default()
    }
}

// Build a 24x24 panel texture in code so the demo needs no asset files:
// dark border, light face, striped stretch bands so tiling is visible.
fn panel_texture() -> Texture2D {
    let mut image = Image::gen_image_color(24, 24, Color::new(0.85, 0.85, 0.9, 1.0));
    for i in 0..24 {
        for &(x, y) in &[(i, 0), (i, 23), (0, i), (23, i)] {
            image.set_pixel(x, y, DARKBLUE);
        }
    }
    for i in 4..20 {
        if i % 2 == 0 {
            image.set_pixel(i, 11, SKYBLUE);
            image.set_pixel(i, 12, SKYBLUE);
            image.set_pixel(11, i, SKYBLUE);
            image.set_pixel(12, i, SKYBLUE);
        }
    }
    let tex = Texture2D::from_image(&image);
    tex.set_filter(FilterMode::Nearest);
    tex
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut patch = TenPatchDrawable::new(
        StretchAreas::from_flat(&[4, 19]).expect("valid stretch pairs"),
        StretchAreas::from_flat(&[4, 19]).expect("valid stretch pairs"),
        true,
        panel_texture(),
    );
    patch.set_offset_speed(12.0, 4.0);

    loop {
        clear_background(BLACK);

        patch.update(get_frame_time());

        let (mx, my) = mouse_position();
        let w = (mx - 80.0).max(8.0);
        let h = (my - 80.0).max(8.0);
        if let Err(err) = patch.draw(80.0, 80.0, w, h) {
            draw_text(&format!("draw failed: {err}"), 20.0, 40.0, 30.0, RED);
        }

        draw_text(
            &format!("FPS: {}", get_fps()),
            screen_width() - 135.0,
            55.0,
            30.0,
            RED,
        );

        next_frame().await;
    }
}
