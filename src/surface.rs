// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The drawing surface.  The game only ever talks to the `Surface`
//! trait, a small subset of a 2D canvas context: fill a rectangle,
//! fill a circle, clear a rectangle, pick a fill style and a font.
//! All coordinates are fractional surface units.
//!
//! `Canvas` is the raster implementation.  It blends every fill into
//! the pixels it touches in proportion to the area it covers, so a
//! point 0.4 units across darkens a pixel a little instead of
//! painting the whole of it.

use image::png::PNGEncoder;
use image::{ColorType, Pixel, Rgba, RgbaImage};
use num::clamp;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use color::Color;
use errors::Result;
use planes::Point;

/// Radius at and above which `draw_point` switches from squares to
/// circles.
pub const CIRCLE_THRESHOLD: f64 = 4.0;

// Samples per axis when estimating how much of a pixel a circle covers.
const SUPERSAMPLES: usize = 4;

/// The contract between the game and whatever it draws on.
pub trait Surface {
    /// Current width in surface units.
    fn width(&self) -> u32;
    /// Current height in surface units.
    fn height(&self) -> u32;
    /// Change the surface dimensions.
    fn resize(&mut self, width: u32, height: u32);
    /// Colour used by subsequent fills.
    fn set_fill_style(&mut self, style: Color);
    /// Font used by any subsequent text.
    fn set_font(&mut self, font: &str);
    /// Fill an axis-aligned rectangle with the current fill style.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    /// Fill a full circle with the current fill style.
    fn fill_circle(&mut self, center: Point, radius: f64);
    /// Reset a rectangle to transparent.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}

/// Draw one point.  Below `CIRCLE_THRESHOLD` the point is a filled
/// `size`-by-`size` square anchored at its top-left corner, which is
/// cheap and is what the game's tiny points use; otherwise it's a
/// filled circle of radius `size`, which is what the vertex markers
/// use.
pub fn draw_point<S: Surface + ?Sized>(surface: &mut S, point: Point, size: f64, style: Color) {
    surface.set_fill_style(style);
    if size < CIRCLE_THRESHOLD {
        surface.fill_rect(point.x, point.y, size, size);
    } else {
        surface.fill_circle(point, size);
    }
}

/// A raster surface backed by an RGBA image buffer.
pub struct Canvas {
    image: RgbaImage,
    fill: Color,
    font: String,
}

impl Canvas {
    /// A transparent canvas of the given size.
    pub fn new(width: u32, height: u32) -> Canvas {
        Canvas {
            image: RgbaImage::from_pixel(width, height, to_rgba(Color::TRANSPARENT)),
            fill: Color::BLACK,
            font: String::from("10px sans-serif"),
        }
    }

    /// The font most recently set.  Nothing in the raster renders
    /// text, but callers laying out captions can ask for it.
    pub fn font(&self) -> &str {
        &self.font
    }

    /// Read one pixel back.  Panics if the pixel is off the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        from_rgba(self.image.get_pixel(x, y))
    }

    /// Encode the raster as an 8-bit RGBA PNG.
    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let output = BufWriter::new(File::create(path)?);
        let encoder = PNGEncoder::new(output);
        encoder.encode(
            &self.image,
            self.image.width(),
            self.image.height(),
            ColorType::RGBA(8),
        )?;
        Ok(())
    }

    /// Blend `color` into one pixel, source-over, with the colour's
    /// alpha scaled by `coverage`.
    fn blend(&mut self, x: u32, y: u32, color: Color, coverage: f64) {
        let src_a = (f64::from(color.a) / 255.0) * clamp(coverage, 0.0, 1.0);
        if src_a <= 0.0 {
            return;
        }
        let dst = from_rgba(self.image.get_pixel(x, y));
        let dst_a = f64::from(dst.a) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        let channel = |s: u8, d: u8| -> u8 {
            let v = (f64::from(s) * src_a + f64::from(d) * dst_a * (1.0 - src_a)) / out_a;
            clamp(v.round(), 0.0, 255.0) as u8
        };
        let blended = Color {
            r: channel(color.r, dst.r),
            g: channel(color.g, dst.g),
            b: channel(color.b, dst.b),
            a: clamp((out_a * 255.0).round(), 0.0, 255.0) as u8,
        };
        self.image.put_pixel(x, y, to_rgba(blended));
    }

    /// The pixel columns (or rows) that a span from `start` to `end`
    /// touches, clipped to `0..limit`.
    fn span(start: f64, end: f64, limit: u32) -> (u32, u32) {
        let lo = clamp(start.floor(), 0.0, f64::from(limit)) as u32;
        let hi = clamp(end.ceil(), 0.0, f64::from(limit)) as u32;
        (lo, hi)
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    /// Keeps whatever of the old drawing still fits, anchored at the
    /// top-left corner.  New area starts transparent.
    fn resize(&mut self, width: u32, height: u32) {
        if width == self.image.width() && height == self.image.height() {
            return;
        }
        let mut resized = RgbaImage::from_pixel(width, height, to_rgba(Color::TRANSPARENT));
        let keep_w = width.min(self.image.width());
        let keep_h = height.min(self.image.height());
        for (x, y) in iproduct!(0..keep_w, 0..keep_h) {
            resized.put_pixel(x, y, *self.image.get_pixel(x, y));
        }
        self.image = resized;
    }

    fn set_fill_style(&mut self, style: Color) {
        self.fill = style;
    }

    fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if !(width > 0.0 && height > 0.0) {
            return;
        }
        let (x1, y1) = (x + width, y + height);
        let (col_lo, col_hi) = Canvas::span(x, x1, self.image.width());
        let (row_lo, row_hi) = Canvas::span(y, y1, self.image.height());
        let fill = self.fill;
        for (col, row) in iproduct!(col_lo..col_hi, row_lo..row_hi) {
            let (px, py) = (f64::from(col), f64::from(row));
            let cover_x = x1.min(px + 1.0) - x.max(px);
            let cover_y = y1.min(py + 1.0) - y.max(py);
            if cover_x > 0.0 && cover_y > 0.0 {
                self.blend(col, row, fill, cover_x * cover_y);
            }
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64) {
        if !(radius > 0.0) {
            return;
        }
        let (col_lo, col_hi) = Canvas::span(center.x - radius, center.x + radius, self.image.width());
        let (row_lo, row_hi) = Canvas::span(center.y - radius, center.y + radius, self.image.height());
        let fill = self.fill;
        let r2 = radius * radius;
        let step = 1.0 / SUPERSAMPLES as f64;
        for (col, row) in iproduct!(col_lo..col_hi, row_lo..row_hi) {
            let inside = iproduct!(0..SUPERSAMPLES, 0..SUPERSAMPLES)
                .filter(|&(i, j)| {
                    let sample = Point::new(
                        f64::from(col) + (i as f64 + 0.5) * step,
                        f64::from(row) + (j as f64 + 0.5) * step,
                    );
                    sample.distance_squared(center) <= r2
                })
                .count();
            if inside > 0 {
                self.blend(col, row, fill, inside as f64 / (SUPERSAMPLES * SUPERSAMPLES) as f64);
            }
        }
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let (col_lo, col_hi) = Canvas::span(x.round(), (x + width).round(), self.image.width());
        let (row_lo, row_hi) = Canvas::span(y.round(), (y + height).round(), self.image.height());
        let clear = to_rgba(Color::TRANSPARENT);
        for (col, row) in iproduct!(col_lo..col_hi, row_lo..row_hi) {
            self.image.put_pixel(col, row, clear);
        }
    }
}

fn to_rgba(color: Color) -> Rgba<u8> {
    Rgba::from_channels(color.r, color.g, color.b, color.a)
}

fn from_rgba(pixel: &Rgba<u8>) -> Color {
    let c = pixel.channels();
    Color { r: c[0], g: c[1], b: c[2], a: c[3] }
}


#[cfg(test)]
mod tests {
    use super::recording::{Op, Recorder};
    use super::*;

    #[test]
    fn small_points_are_squares() {
        let mut r = Recorder::new(10, 10);
        draw_point(&mut r, Point::new(2.0, 3.0), 0.4, Color::BLACK);
        assert_eq!(r.ops, vec![Op::Style(Color::BLACK), Op::Rect(2.0, 3.0, 0.4, 0.4)]);
    }

    #[test]
    fn large_points_are_circles() {
        let mut r = Recorder::new(10, 10);
        draw_point(&mut r, Point::new(2.0, 3.0), 6.0, Color::MARKER);
        draw_point(&mut r, Point::new(1.0, 1.0), 4.0, Color::MARKER);
        assert_eq!(
            r.circles(),
            vec![(Point::new(2.0, 3.0), 6.0), (Point::new(1.0, 1.0), 4.0)]
        );
        assert!(r.rects().is_empty());
    }

    #[test]
    fn new_canvas_is_transparent() {
        let c = Canvas::new(3, 2);
        assert_eq!(c.width(), 3);
        assert_eq!(c.height(), 2);
        assert_eq!(c.pixel(2, 1), Color::TRANSPARENT);
    }

    #[test]
    fn whole_pixel_fill_is_opaque() {
        let mut c = Canvas::new(4, 4);
        c.set_fill_style(Color::WHITE);
        c.fill_rect(0.0, 0.0, 4.0, 4.0);
        c.set_fill_style(Color::BLACK);
        c.fill_rect(1.0, 1.0, 1.0, 1.0);
        assert_eq!(c.pixel(1, 1), Color::BLACK);
        assert_eq!(c.pixel(0, 0), Color::WHITE);
        assert_eq!(c.pixel(2, 2), Color::WHITE);
    }

    #[test]
    fn sub_pixel_fill_shades_partially() {
        let mut c = Canvas::new(2, 2);
        c.set_fill_style(Color::WHITE);
        c.fill_rect(0.0, 0.0, 2.0, 2.0);
        c.set_fill_style(Color::BLACK);
        c.fill_rect(0.3, 0.3, 0.5, 0.5);
        // 0.25 coverage of black over white.
        let p = c.pixel(0, 0);
        assert_eq!(p.a, 255);
        assert_eq!(p.r, 191);
        assert_eq!(p.r, p.g);
        assert_eq!(p.g, p.b);
        assert_eq!(c.pixel(1, 1), Color::WHITE);
    }

    #[test]
    fn repeated_sub_pixel_fills_darken() {
        let mut c = Canvas::new(1, 1);
        c.set_fill_style(Color::WHITE);
        c.fill_rect(0.0, 0.0, 1.0, 1.0);
        c.set_fill_style(Color::BLACK);
        c.fill_rect(0.2, 0.2, 0.4, 0.4);
        let once = c.pixel(0, 0).r;
        c.fill_rect(0.2, 0.2, 0.4, 0.4);
        assert!(c.pixel(0, 0).r < once);
    }

    #[test]
    fn fills_straddling_pixels_split_coverage() {
        let mut c = Canvas::new(2, 1);
        c.set_fill_style(Color::BLACK);
        c.fill_rect(0.5, 0.0, 1.0, 1.0);
        assert_eq!(c.pixel(0, 0).a, 128);
        assert_eq!(c.pixel(1, 0).a, 128);
    }

    #[test]
    fn fills_off_the_canvas_are_clipped() {
        let mut c = Canvas::new(2, 2);
        c.set_fill_style(Color::BLACK);
        c.fill_rect(-5.0, -5.0, 2.0, 2.0);
        c.fill_rect(10.0, 10.0, 2.0, 2.0);
        c.fill_circle(Point::new(-20.0, 1.0), 6.0);
        for (x, y) in iproduct!(0..2, 0..2) {
            assert_eq!(c.pixel(x, y), Color::TRANSPARENT);
        }
    }

    #[test]
    fn circle_covers_its_center_not_its_corners() {
        let mut c = Canvas::new(20, 20);
        c.set_fill_style(Color::MARKER);
        c.fill_circle(Point::new(10.0, 10.0), 6.0);
        assert_eq!(c.pixel(10, 10), Color::MARKER);
        assert_eq!(c.pixel(5, 10), Color::MARKER);
        assert_eq!(c.pixel(4, 4), Color::TRANSPARENT);
        assert_eq!(c.pixel(15, 15), Color::TRANSPARENT);
    }

    #[test]
    fn clear_rect_restores_transparency() {
        let mut c = Canvas::new(3, 3);
        c.set_fill_style(Color::BLACK);
        c.fill_rect(0.0, 0.0, 3.0, 3.0);
        c.clear_rect(1.0, 1.0, 2.0, 2.0);
        assert_eq!(c.pixel(0, 0), Color::BLACK);
        assert_eq!(c.pixel(1, 1), Color::TRANSPARENT);
        assert_eq!(c.pixel(2, 2), Color::TRANSPARENT);
    }

    #[test]
    fn resize_keeps_the_overlap() {
        let mut c = Canvas::new(2, 2);
        c.set_fill_style(Color::BLACK);
        c.fill_rect(0.0, 0.0, 2.0, 2.0);
        c.resize(3, 1);
        assert_eq!((c.width(), c.height()), (3, 1));
        assert_eq!(c.pixel(0, 0), Color::BLACK);
        assert_eq!(c.pixel(1, 0), Color::BLACK);
        assert_eq!(c.pixel(2, 0), Color::TRANSPARENT);
    }

    #[test]
    fn font_is_remembered() {
        let mut c = Canvas::new(1, 1);
        c.set_font("1.0em Arial");
        assert_eq!(c.font(), "1.0em Arial");
    }

    #[test]
    fn writes_a_png() {
        let dir = ::tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let mut c = Canvas::new(8, 8);
        c.set_fill_style(Color::WHITE);
        c.fill_rect(0.0, 0.0, 8.0, 8.0);
        c.write_png(&path).unwrap();
        let bytes = ::std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
