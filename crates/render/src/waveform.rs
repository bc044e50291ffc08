//! Step-wise "M" waveform glyph.
//!
//! The glyph is a flat high plateau, a stair-stepped descent into a short
//! dip, a mirrored ascent and a second plateau. Every segment is a straight
//! horizontal bar, so the whole shape is a list of rectangles that can be
//! checked without rasterising anything.

use crate::canvas::{Canvas, Rect};
use types::{Color, Palette};

/// Vertical extent of every bar, added to its top edge.
pub const BAR_THICKNESS: f32 = 3.0;

const STEPS_ACROSS: f32 = 16.0;
const HIGH_AMPLITUDE: f32 = 0.35;
const LOW_AMPLITUDE: f32 = 0.12;
const PLATEAU_STEPS: usize = 5;
const PLATEAU_ADVANCE: f32 = 0.8;
const SLOPE_STEPS: usize = 8;
const SLOPE_ADVANCE: f32 = 0.6;
const SLOPE_BAR: f32 = 0.7;
const DIP_STEPS: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub rect: Rect,
    pub color: Color,
}

/// Derived layout of the glyph inside a padded square region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveGeometry {
    pub origin_x: f32,
    pub step: f32,
    pub baseline: f32,
    pub high: f32,
    pub low: f32,
}

impl WaveGeometry {
    pub fn new(region: Rect, padding: f32) -> Self {
        let width = region.x1 - region.x0 - 2.0 * padding;
        let height = region.y1 - region.y0 - 2.0 * padding;
        Self {
            origin_x: region.x0 + padding,
            step: width / STEPS_ACROSS,
            baseline: region.y0 + padding + height / 2.0,
            high: height * HIGH_AMPLITUDE,
            low: height * LOW_AMPLITUDE,
        }
    }

    fn bar(x0: f32, x1: f32, y: f32, color: Color) -> Bar {
        Bar { rect: Rect::new(x0, y, x1, y + BAR_THICKNESS), color }
    }

    /// Plateau step: light bar with a darker trailing edge.
    fn step_with_tail(out: &mut Vec<Bar>, x: f32, y: f32, w: f32) {
        out.push(Self::bar(x, x + w * 0.9, y, Palette::GREEN_LIGHT));
        out.push(Self::bar(x + w * 0.9, x + w, y, Palette::GREEN_DARK));
    }

    /// Bars in draw order. Later bars win where they overlap.
    pub fn bars(&self) -> Vec<Bar> {
        let step = self.step;
        let top = self.baseline - self.high;
        let bottom = self.baseline + self.low;
        let drop = self.high + self.low;
        let mut bars = Vec::with_capacity(2 * PLATEAU_STEPS + 2 * SLOPE_STEPS + PLATEAU_STEPS + 1);
        let mut cursor = self.origin_x;

        for i in 0..PLATEAU_STEPS {
            let x = cursor + i as f32 * step * PLATEAU_ADVANCE;
            Self::step_with_tail(&mut bars, x, top, step * 0.9);
        }
        cursor += PLATEAU_STEPS as f32 * step * PLATEAU_ADVANCE;

        for i in 0..SLOPE_STEPS {
            let progress = i as f32 / SLOPE_STEPS as f32;
            let x = cursor + i as f32 * step * SLOPE_ADVANCE;
            bars.push(Self::bar(x, x + step * SLOPE_BAR, top + drop * progress, Palette::GREEN_LIGHT));
        }
        cursor += SLOPE_STEPS as f32 * step * SLOPE_ADVANCE;

        bars.push(Self::bar(cursor, cursor + step * DIP_STEPS, bottom, Palette::GREEN_LIGHT));
        cursor += step * DIP_STEPS;

        for i in 0..SLOPE_STEPS {
            let progress = i as f32 / SLOPE_STEPS as f32;
            let x = cursor + i as f32 * step * SLOPE_ADVANCE;
            bars.push(Self::bar(x, x + step * SLOPE_BAR, bottom - drop * progress, Palette::GREEN_LIGHT));
        }
        cursor += SLOPE_STEPS as f32 * step * SLOPE_ADVANCE;

        for i in 0..PLATEAU_STEPS {
            let x = cursor + i as f32 * step * PLATEAU_ADVANCE;
            bars.push(Self::bar(x, x + step * 0.9, top, Palette::GREEN_LIGHT));
        }

        bars
    }
}

/// Bars of the glyph for a square `size` canvas inset by `padding`.
pub fn waveform_bars(size: u32, padding: f32) -> Vec<Bar> {
    let region = Rect::new(0.0, 0.0, size as f32, size as f32);
    WaveGeometry::new(region, padding).bars()
}

pub fn draw_waveform(canvas: &mut Canvas, padding: f32) {
    for bar in waveform_bars(canvas.width(), padding) {
        canvas.fill_rect(bar.rect, bar.color);
    }
}
