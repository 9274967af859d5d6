//! Raster text compositing: measured, horizontally centered glyph drawing and
//! decorative underlines. Centering is always computed against the actual
//! canvas width, which is what keeps the layout resolution-independent
//! without per-template horizontal offsets.

use image::{Rgb, RgbImage};
use rusttype::{point, Font, Scale};

/// Pixel width of `text` at `px`, from the laid-out glyph bounding boxes.
pub fn text_width(font: &Font<'static>, px: f32, text: &str) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    let scale = Scale::uniform(px);
    let v_metrics = font.v_metrics(scale);
    let mut width: f32 = 0.0;
    for g in font.layout(text, scale, point(0.0, v_metrics.ascent)) {
        if let Some(bb) = g.pixel_bounding_box() {
            width = width.max(bb.max.x as f32);
        }
    }
    width
}

/// Draws `text` top-anchored at `y`, horizontally centered on the canvas.
/// Returns `(x_left, width)` so callers can underline exactly what was drawn.
pub fn draw_centered(
    canvas: &mut RgbImage,
    font: &Font<'static>,
    px: f32,
    y: i32,
    color: Rgb<u8>,
    text: &str,
) -> (i32, u32) {
    let width = text_width(font, px, text);
    let x = ((canvas.width() as f32 - width) / 2.0) as i32;
    draw_text(canvas, font, px, x, y, color, text);
    (x, width as u32)
}

/// Filled rectangle spanning `[x, x+width] x [y, y+thickness]`.
pub fn draw_underline(canvas: &mut RgbImage, x: i32, y: i32, width: u32, thickness: u32) {
    for py in y..y + thickness as i32 {
        if py < 0 || py >= canvas.height() as i32 {
            continue;
        }
        for px in x..x + width as i32 {
            if px < 0 || px >= canvas.width() as i32 {
                continue;
            }
            canvas.put_pixel(px as u32, py as u32, Rgb([0, 0, 0]));
        }
    }
}

fn draw_text(canvas: &mut RgbImage, font: &Font<'static>, px: f32, x: i32, y: i32, color: Rgb<u8>, text: &str) {
    let scale = Scale::uniform(px);
    let v_metrics = font.v_metrics(scale);
    let baseline = y as f32 + v_metrics.ascent;

    for glyph in font.layout(text, scale, point(x as f32, baseline)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, v| {
            let tx = gx as i32 + bb.min.x;
            let ty = gy as i32 + bb.min.y;
            if tx < 0 || ty < 0 {
                return;
            }
            let (tx, ty) = (tx as u32, ty as u32);
            if tx >= canvas.width() || ty >= canvas.height() || v <= 0.0 {
                return;
            }
            let dst = canvas.get_pixel_mut(tx, ty);
            let inv = 1.0 - v;
            dst.0[0] = (color.0[0] as f32 * v + dst.0[0] as f32 * inv) as u8;
            dst.0[1] = (color.0[1] as f32 * v + dst.0[1] as f32 * inv) as u8;
            dst.0[2] = (color.0[2] as f32 * v + dst.0[2] as f32 * inv) as u8;
        });
    }
}
