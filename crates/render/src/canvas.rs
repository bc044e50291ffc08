use image::{Rgba, RgbaImage};
use types::Color;

/// Axis-aligned rectangle in inclusive pixel coordinates, `x1`/`y1` included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Rect {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn inset(&self, by: f32) -> Self {
        Self::new(self.x0 + by, self.y0 + by, self.x1 - by, self.y1 - by)
    }

    pub fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// Whether the centre of pixel (px, py) lies in this rect with corners
    /// rounded by `radius`. The covered area spans `[x0, x1 + 1]`.
    fn covers(&self, px: u32, py: u32, radius: f32) -> bool {
        if self.is_empty() {
            return false;
        }
        let (left, top) = (self.x0, self.y0);
        let (right, bottom) = (self.x1 + 1.0, self.y1 + 1.0);
        let cx = px as f32 + 0.5;
        let cy = py as f32 + 0.5;
        if cx < left || cx > right || cy < top || cy > bottom {
            return false;
        }
        let r = radius.min((right - left) / 2.0).min((bottom - top) / 2.0).max(0.0);
        if r == 0.0 {
            return true;
        }
        let nx = cx.clamp(left + r, right - r);
        let ny = cy.clamp(top + r, bottom - r);
        let (dx, dy) = (cx - nx, cy - ny);
        dx * dx + dy * dy <= r * r
    }
}

/// RGBA drawing surface. Every primitive replaces the pixels it covers,
/// alpha included, the way Pillow's `ImageDraw` treats an RGBA image.
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    /// Fully transparent square canvas.
    pub fn new(size: u32) -> Self {
        Self { img: RgbaImage::new(size, size) }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.img.get_pixel(x, y)
    }

    fn paint(&mut self, x: u32, y: u32, color: Color) {
        self.img.put_pixel(x, y, Rgba(color.to_array()));
    }

    /// Pixel span covered by inclusive float bounds, clipped to `0..limit`.
    fn span(a: f32, b: f32, limit: u32) -> Option<(u32, u32)> {
        if limit == 0 {
            return None;
        }
        let lo = a.floor().max(0.0);
        let hi = b.floor().min((limit - 1) as f32);
        if hi < lo {
            return None;
        }
        Some((lo as u32, hi as u32))
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let Some((x0, x1)) = Self::span(rect.x0, rect.x1, self.width()) else {
            return;
        };
        let Some((y0, y1)) = Self::span(rect.y0, rect.y1, self.height()) else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.paint(x, y, color);
            }
        }
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                if rect.covers(x, y, radius) {
                    self.paint(x, y, color);
                }
            }
        }
    }

    /// Outline of `width` pixels running just inside the rounded rect.
    pub fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, width: f32, color: Color) {
        let inner = rect.inset(width);
        let inner_radius = (radius - width).max(0.0);
        for y in 0..self.height() {
            for x in 0..self.width() {
                if rect.covers(x, y, radius) && !inner.covers(x, y, inner_radius) {
                    self.paint(x, y, color);
                }
            }
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }
}
