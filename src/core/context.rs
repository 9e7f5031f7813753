use std::ops::RangeInclusive;

use crate::math::{Color, PremultipliedColor};
use crate::types::PixelFormatDescriptor;

/// 2D drawing commands understood by [`DrawingContext`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    /// Replace every pixel with color, no blending
    Clear(Color),

    /// Blend a single pixel at (x, y)
    Pixel { x: i32, y: i32, color: Color },

    /// Horizontal line from (x, y) with length
    HLine { x: i32, y: i32, length: u32, color: Color },

    /// Vertical line from (x, y) with length
    VLine { x: i32, y: i32, length: u32, color: Color },

    /// Filled rectangle
    Rect { x: i32, y: i32, width: u32, height: u32, color: Color },

    /// Circle outline at (cx, cy)
    Circle { cx: i32, cy: i32, radius: u32, color: Color },

    /// Filled circle at (cx, cy)
    FilledCircle { cx: i32, cy: i32, radius: u32, color: Color },

    /// Line from (x1, y1) to (x2, y2)
    Line { x1: i32, y1: i32, x2: i32, y2: i32, color: Color },
}

/// Drawing context bound to a surface's pixel buffer.
///
/// Colors are straight alpha on input and are premultiplied before being
/// composited source-over into the canonical format. Anything outside the
/// surface is clipped.
pub struct DrawingContext<'a> {
    words: &'a mut [u32],
    width: u32,
    height: u32,
    bytes_per_row: usize,
    format: PixelFormatDescriptor,
}

impl<'a> DrawingContext<'a> {
    pub(crate) fn new(
        words: &'a mut [u32],
        width: u32,
        height: u32,
        bytes_per_row: usize,
        format: PixelFormatDescriptor,
    ) -> Self {
        Self { words, width, height, bytes_per_row, format }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    pub fn pixel_format(&self) -> &PixelFormatDescriptor {
        &self.format
    }

    /// Run one draw operation
    pub fn apply(&mut self, op: &DrawOp) {
        match *op {
            DrawOp::Clear(color) => self.clear(color),
            DrawOp::Pixel { x, y, color } => self.set_pixel(x, y, color),
            DrawOp::HLine { x, y, length, color } => self.hline(x, y, length, color),
            DrawOp::VLine { x, y, length, color } => self.vline(x, y, length, color),
            DrawOp::Rect { x, y, width, height, color } => {
                self.fill_rect(x, y, width, height, color)
            }
            DrawOp::Circle { cx, cy, radius, color } => self.circle(cx, cy, radius, color),
            DrawOp::FilledCircle { cx, cy, radius, color } => {
                self.fill_circle(cx, cy, radius, color)
            }
            DrawOp::Line { x1, y1, x2, y2, color } => self.line(x1, y1, x2, y2, color),
        }
    }

    /// Run operations in order
    pub fn apply_all(&mut self, ops: &[DrawOp]) {
        for op in ops {
            self.apply(op);
        }
    }

    pub fn clear(&mut self, color: Color) {
        let word = color.premultiply().to_word().to_le();
        self.words.fill(word);
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.blend(x, y, color.premultiply());
    }

    pub fn hline(&mut self, x: i32, y: i32, length: u32, color: Color) {
        self.fill_rect(x, y, length, 1, color);
    }

    pub fn vline(&mut self, x: i32, y: i32, length: u32, color: Color) {
        self.fill_rect(x, y, 1, length, color);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let src = color.premultiply();
        if src.a == 0 {
            return;
        }

        let y0 = (y as i64).max(0);
        let y1 = (y as i64 + height as i64).min(self.height as i64);
        for row in y0..y1 {
            self.fill_span(row, x as i64, x as i64 + width as i64, src);
        }
    }

    /// Circle outline, midpoint algorithm
    pub fn circle(&mut self, cx: i32, cy: i32, radius: u32, color: Color) {
        let src = color.premultiply();
        let (cx, cy, r) = (cx as i64, cy as i64, radius as i64);
        let (w, h) = (self.width as i64, self.height as i64);

        if cx + r < 0 || cx - r >= w || cy + r < 0 || cy - r >= h {
            return;
        }

        // Surface entirely inside the ring: the outline cannot touch it.
        let far_x = cx.abs().max((cx - (w - 1)).abs()) as i128;
        let far_y = cy.abs().max((cy - (h - 1)).abs()) as i128;
        if r >= 2 && far_x * far_x + far_y * far_y < ((r - 2) as i128).pow(2) {
            return;
        }

        // Every octant point has one offset of `y` along some axis; past the
        // farthest surface pixel nothing more can land.
        let reach = far_x.max(far_y) as i64;

        let mut x = r;
        let mut y = 0i64;
        let mut err = 0i64;

        while x >= y && y <= reach {
            // The eight octant points coincide on the axes and diagonals;
            // dedupe so semi-transparent outlines are not blended twice.
            let mut points = [
                (cx + x, cy + y),
                (cx + y, cy + x),
                (cx - y, cy + x),
                (cx - x, cy + y),
                (cx - x, cy - y),
                (cx - y, cy - x),
                (cx + y, cy - x),
                (cx + x, cy - y),
            ];
            points.sort_unstable();
            let mut last = None;
            for p in points {
                if last != Some(p) {
                    self.blend_i64(p.0, p.1, src);
                    last = Some(p);
                }
            }

            y += 1;
            if err <= 0 {
                err += 2 * y + 1;
            }
            if err > 0 {
                x -= 1;
                err -= 2 * x + 1;
            }
        }
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Color) {
        let src = color.premultiply();
        if src.a == 0 {
            return;
        }

        let (cx, cy, r) = (cx as i64, cy as i64, radius as i64);
        let r_sq = (r as i128).pow(2);

        let dy_lo = (-r).max(-cy);
        let dy_hi = r.min(self.height as i64 - 1 - cy);
        for dy in dy_lo..=dy_hi {
            let half = isqrt(r_sq - (dy as i128).pow(2));
            self.fill_span(cy + dy, cx - half, cx + half + 1, src);
        }
    }

    /// Line with both endpoints inclusive. Only the steps whose major-axis
    /// coordinate lands on the surface are visited.
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        let src = color.premultiply();
        let (x1, y1, x2, y2) = (x1 as i64, y1 as i64, x2 as i64, y2 as i64);
        let (adx, ady) = ((x2 - x1).abs(), (y2 - y1).abs());
        let (sx, sy) = ((x2 - x1).signum(), (y2 - y1).signum());

        if adx >= ady {
            for i in visible_steps(x1, sx, adx, self.width) {
                self.blend_i64(x1 + sx * i, y1 + sy * scale_round(i, ady, adx), src);
            }
        } else {
            for i in visible_steps(y1, sy, ady, self.height) {
                self.blend_i64(x1 + sx * scale_round(i, adx, ady), y1 + sy * i, src);
            }
        }
    }

    /// Blend `src` over row `y` from `x0` up to, not including, `x1`
    fn fill_span(&mut self, y: i64, x0: i64, x1: i64, src: PremultipliedColor) {
        if y < 0 || y >= self.height as i64 {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.width as i64);
        if x0 >= x1 {
            return;
        }

        let start = y as usize * self.width as usize;
        for word in &mut self.words[start + x0 as usize..start + x1 as usize] {
            *word = composite(src, *word);
        }
    }

    fn blend(&mut self, x: i32, y: i32, src: PremultipliedColor) {
        self.blend_i64(x as i64, y as i64, src);
    }

    fn blend_i64(&mut self, x: i64, y: i64, src: PremultipliedColor) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.words[idx] = composite(src, self.words[idx]);
    }
}

/// Steps `i` in `0..=len` for which `start + step * i` lies in `0..extent`
fn visible_steps(start: i64, step: i64, len: i64, extent: u32) -> RangeInclusive<i64> {
    let last = extent as i64 - 1;
    match step {
        1 => (-start).max(0)..=len.min(last - start),
        -1 => (start - last).max(0)..=len.min(start),
        _ => 0..=if (0..=last).contains(&start) { 0 } else { -1 },
    }
}

/// `i * num / den`, rounded half up; `0` for a zero denominator
fn scale_round(i: i64, num: i64, den: i64) -> i64 {
    if den == 0 {
        return 0;
    }
    ((2 * i as i128 * num as i128 + den as i128) / (2 * den as i128)) as i64
}

/// Floor square root of a non-negative value
fn isqrt(v: i128) -> i64 {
    let mut s = (v as f64).sqrt() as i128;
    while s * s > v {
        s -= 1;
    }
    while (s + 1) * (s + 1) <= v {
        s += 1;
    }
    s as i64
}

#[inline]
fn composite(src: PremultipliedColor, stored: u32) -> u32 {
    let dst = PremultipliedColor::from_word(u32::from_le(stored));
    src.over(dst).to_word().to_le()
}
