pub mod canvas;
pub mod waveform;

use canvas::{Canvas, Rect};
use image::RgbaImage;
use thiserror::Error;
use types::{Color, Palette};

pub use waveform::{waveform_bars, Bar, WaveGeometry};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("icon size must be between 1 and {max} pixels, got {0}", max = MAX_SIZE)]
    InvalidSize(u32),
}

/// Largest canvas `compose_icon` accepts.
pub const MAX_SIZE: u32 = 8192;

/// Layout constants are tuned on a 1024 px master and scaled linearly.
const MASTER: f32 = 1024.0;
const CORNER_RADIUS: f32 = 22.0;
const WAVE_PADDING: f32 = 200.0;
const GRADIENT_MAX_ALPHA: f32 = 25.0;
const HIGHLIGHT_MAX_ALPHA: f32 = 40.0;
const HIGHLIGHT_FRACTION: f32 = 0.15;

pub fn corner_radius(size: u32) -> f32 {
    size as f32 * CORNER_RADIUS / MASTER
}

pub fn wave_padding(size: u32) -> f32 {
    size as f32 * WAVE_PADDING / MASTER
}

pub fn border_width(size: u32) -> u32 {
    (size / 128).max(1)
}

/// Colour of gradient row `i` out of `half`, fading out towards the middle.
pub fn gradient_row(i: u32, half: u32) -> Color {
    let lerp = |top: u8, bottom: u8| -> u8 {
        let (top, bottom) = (top as i32, bottom as i32);
        (top + (bottom - top) * i as i32 / half as i32) as u8
    };
    let alpha = (GRADIENT_MAX_ALPHA * (1.0 - i as f32 / half as f32)) as u8;
    Color {
        r: lerp(Palette::BG_TOP.r, Palette::BG_BOTTOM.r),
        g: lerp(Palette::BG_TOP.g, Palette::BG_BOTTOM.g),
        b: lerp(Palette::BG_TOP.b, Palette::BG_BOTTOM.b),
        a: alpha,
    }
}

/// Alpha of highlight row `i` for a canvas of `size` pixels.
pub fn highlight_alpha(i: u32, size: u32) -> u8 {
    let rows = size as f32 * HIGHLIGHT_FRACTION;
    (HIGHLIGHT_MAX_ALPHA * (1.0 - i as f32 / rows)) as u8
}

/// Two-row band starting at row `i`; the next band overwrites its second row.
fn band(canvas: &mut Canvas, i: u32, color: Color) {
    let right = canvas.width() as f32;
    canvas.fill_rect(Rect::new(0.0, i as f32, right, i as f32 + 1.0), color);
}

fn draw_gradient(canvas: &mut Canvas) {
    let half = canvas.height() / 2;
    for i in 0..half {
        band(canvas, i, gradient_row(i, half));
    }
}

fn draw_highlight(canvas: &mut Canvas) {
    let size = canvas.height();
    let rows = (size as f32 * HIGHLIGHT_FRACTION) as u32;
    for i in 0..rows {
        band(canvas, i, Palette::HIGHLIGHT.with_alpha(highlight_alpha(i, size)));
    }
}

fn draw_border(canvas: &mut Canvas) {
    let size = canvas.width();
    let bw = border_width(size) as f32;
    let far = size as f32 - bw - 1.0;
    let radius = (corner_radius(size) * 0.8).max(2.0);
    canvas.stroke_rounded_rect(Rect::new(bw, bw, far, far), radius, 1.0, Palette::BORDER);
}

/// Draw the MoPort app icon at `size` x `size` pixels.
pub fn compose_icon(size: u32) -> Result<RgbaImage, RenderError> {
    if size == 0 || size > MAX_SIZE {
        return Err(RenderError::InvalidSize(size));
    }
    tracing::debug!(size, "composing icon");
    let mut canvas = Canvas::new(size);
    let edge = size as f32;

    // Overlays replace pixels, so the translucent gradient and highlight
    // rows define the final alpha of the upper part of the icon.
    canvas.fill_rounded_rect(Rect::new(0.0, 0.0, edge, edge), corner_radius(size), Palette::BG_TOP);
    draw_gradient(&mut canvas);
    waveform::draw_waveform(&mut canvas, wave_padding(size));
    draw_highlight(&mut canvas);
    draw_border(&mut canvas);

    Ok(canvas.into_image())
}
