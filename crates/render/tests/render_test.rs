#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use image::Rgba;
    use render::canvas::{Canvas, Rect};
    use render::{
        border_width, compose_icon, gradient_row, highlight_alpha, waveform_bars, RenderError, WaveGeometry,
        MAX_SIZE,
    };
    use std::collections::BTreeSet;
    use types::Palette;

    #[test]
    fn test_wave_geometry_master() {
        let g = WaveGeometry::new(Rect::new(0.0, 0.0, 1024.0, 1024.0), 200.0);
        assert_relative_eq!(g.origin_x, 200.0, epsilon = 1e-4);
        assert_relative_eq!(g.step, 39.0, epsilon = 1e-4);
        assert_relative_eq!(g.baseline, 512.0, epsilon = 1e-4);
        assert_relative_eq!(g.high, 218.4, epsilon = 1e-3);
        assert_relative_eq!(g.low, 74.88, epsilon = 1e-3);
    }

    #[test]
    fn test_waveform_bar_sequence() {
        let bars = waveform_bars(1024, 200.0);
        // 5 plateau steps with tails, 8 down, dip, 8 up, 5 plateau steps
        assert_eq!(bars.len(), 32);
        let dark = bars.iter().filter(|b| b.color == Palette::GREEN_DARK).count();
        assert_eq!(dark, 5);

        let first = bars[0].rect;
        assert_relative_eq!(first.x0, 200.0, epsilon = 1e-4);
        assert_relative_eq!(first.y0, 512.0 - 218.4, epsilon = 1e-3);
        assert_relative_eq!(first.y1 - first.y0, 3.0, epsilon = 1e-4);

        let descent: Vec<f32> = bars[10..18].iter().map(|b| b.rect.y0).collect();
        assert!(descent.windows(2).all(|w| w[1] > w[0]));

        let dip = bars[18].rect;
        assert_relative_eq!(dip.y0, 512.0 + 74.88, epsilon = 1e-3);
        assert_relative_eq!(dip.x1 - dip.x0, 78.0, epsilon = 1e-3);

        let ascent: Vec<f32> = bars[19..27].iter().map(|b| b.rect.y0).collect();
        assert!(ascent.windows(2).all(|w| w[1] < w[0]));

        for bar in &bars[27..] {
            assert_relative_eq!(bar.rect.y0, first.y0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_waveform_stays_on_canvas() {
        for size in [16u32, 64, 1024] {
            let padding = size as f32 * 200.0 / 1024.0;
            for bar in waveform_bars(size, padding) {
                assert!(bar.rect.x0 >= padding - 1e-3);
                assert!(bar.rect.x1 < size as f32);
            }
        }
    }

    #[test]
    fn test_fill_rect_is_inclusive_and_clipped() {
        let mut canvas = Canvas::new(8);
        canvas.fill_rect(Rect::new(-3.0, 2.4, 1.9, 3.0), Palette::GREEN_LIGHT);
        assert_eq!(canvas.pixel(0, 2), Rgba(Palette::GREEN_LIGHT.to_array()));
        assert_eq!(canvas.pixel(1, 3), Rgba(Palette::GREEN_LIGHT.to_array()));
        assert_eq!(canvas.pixel(2, 2)[3], 0);
        assert_eq!(canvas.pixel(0, 4)[3], 0);
        canvas.fill_rect(Rect::new(6.0, 6.0, 40.0, 40.0), Palette::GREEN_DARK);
        assert_eq!(canvas.pixel(7, 7), Rgba(Palette::GREEN_DARK.to_array()));
    }

    #[test]
    fn test_fill_replaces_alpha() {
        let mut canvas = Canvas::new(4);
        canvas.fill_rect(Rect::new(0.0, 0.0, 3.0, 3.0), Palette::BG_TOP);
        canvas.fill_rect(Rect::new(0.0, 1.0, 3.0, 2.0), Palette::HIGHLIGHT.with_alpha(40));
        assert_eq!(canvas.pixel(2, 1), Rgba([255, 255, 255, 40]));
        assert_eq!(canvas.pixel(2, 2), Rgba([255, 255, 255, 40]));
        assert_eq!(canvas.pixel(2, 3), Rgba([46, 46, 51, 255]));
    }

    #[test]
    fn test_rounded_rect_leaves_corners_clear() {
        let mut canvas = Canvas::new(32);
        canvas.fill_rounded_rect(Rect::new(0.0, 0.0, 31.0, 31.0), 8.0, Palette::BG_TOP);
        assert_eq!(canvas.pixel(0, 0)[3], 0);
        assert_eq!(canvas.pixel(31, 31)[3], 0);
        assert_eq!(canvas.pixel(16, 0), Rgba([46, 46, 51, 255]));
    }

    #[test]
    fn test_gradient_and_highlight_rows() {
        assert_eq!(gradient_row(0, 512), Palette::BG_TOP.with_alpha(25));
        let mid = gradient_row(256, 512);
        assert_eq!((mid.r, mid.g, mid.b, mid.a), (51, 51, 55, 12));
        assert_eq!(highlight_alpha(0, 1024), 40);
        assert_eq!(highlight_alpha(153, 1024), 0);
    }

    #[test]
    fn test_compose_master_icon() {
        let img = compose_icon(1024).unwrap();
        assert_eq!(img.dimensions(), (1024, 1024));
        // bottom corners stay transparent
        assert_eq!(img.get_pixel(0, 1023)[3], 0);
        assert_eq!(img.get_pixel(1023, 1023)[3], 0);
        // plain body below the gradient and glyph
        assert_eq!(*img.get_pixel(512, 900), Rgba([46, 46, 51, 255]));
        // first plateau bar
        assert_eq!(*img.get_pixel(210, 295), Rgba(Palette::GREEN_LIGHT.to_array()));
        // top row is the replaced highlight
        assert_eq!(*img.get_pixel(512, 0), Rgba([255, 255, 255, 40]));
    }

    #[test]
    fn test_compose_gradient_rows() {
        let img = compose_icon(1024).unwrap();
        assert_eq!(*img.get_pixel(100, 300), Rgba([51, 51, 56, 10]));
        // last band spills one row past the half
        assert_eq!(*img.get_pixel(100, 512), Rgba([55, 55, 59, 0]));
        assert_eq!(*img.get_pixel(100, 513), Rgba([46, 46, 51, 255]));

        for size in [64u32, 256, 1024] {
            let img = compose_icon(size).unwrap();
            let first = (size as f32 * 0.15) as u32 + 1;
            let band: Vec<Rgba<u8>> = (first..size / 2).map(|y| *img.get_pixel(size / 8, y)).collect();
            let distinct: BTreeSet<[u8; 4]> = band.iter().map(|p| p.0).collect();
            assert!(distinct.len() > 1, "size {size}: flat gradient band");
            assert!(band.windows(2).all(|w| w[1][3] <= w[0][3]));
            assert!(band.iter().all(|p| p[3] < 255));
        }
    }

    #[test]
    fn test_compose_border_pixels() {
        let img = compose_icon(1024).unwrap();
        let bw = border_width(1024);
        assert_eq!(bw, 8);
        let border = Rgba(Palette::BORDER.to_array());
        assert_eq!(*img.get_pixel(512, bw), border);
        assert_eq!(*img.get_pixel(bw, 512), border);
        assert_eq!(*img.get_pixel(1023 - bw, 700), border);
        assert_eq!(*img.get_pixel(bw + 1, 700), Rgba([46, 46, 51, 255]));
    }

    #[test]
    fn test_compose_small_sizes() {
        for size in [1u32, 2, 16, 32] {
            let img = compose_icon(size).unwrap();
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    #[test]
    fn test_compose_rejects_out_of_range_sizes() {
        assert!(matches!(compose_icon(0), Err(RenderError::InvalidSize(0))));
        assert!(matches!(compose_icon(MAX_SIZE + 1), Err(RenderError::InvalidSize(_))));
        assert!(matches!(compose_icon(u32::MAX), Err(RenderError::InvalidSize(_))));
    }
}
