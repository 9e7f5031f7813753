use serde::Serialize;

/// Straight-alpha RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Build from float components in 0.0..=1.0, clamping out-of-range values
    pub fn from_f32(rgb: [f32; 3], a: f32) -> Self {
        let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgba(to_u8(rgb[0]), to_u8(rgb[1]), to_u8(rgb[2]), to_u8(a))
    }

    pub fn premultiply(self) -> PremultipliedColor {
        PremultipliedColor {
            r: mul_div_255(self.r, self.a),
            g: mul_div_255(self.g, self.a),
            b: mul_div_255(self.b, self.a),
            a: self.a,
        }
    }
}

/// Color with each component already scaled by alpha.
///
/// Invariant: no color component exceeds `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PremultipliedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl PremultipliedColor {
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    /// Pack as an alpha-first word: `a << 24 | r << 16 | g << 8 | b`
    pub const fn to_word(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    pub const fn from_word(word: u32) -> Self {
        Self {
            a: (word >> 24) as u8,
            r: (word >> 16) as u8,
            g: (word >> 8) as u8,
            b: word as u8,
        }
    }

    /// Source-over: `self + dst * (1 - self.a)`
    pub fn over(self, dst: Self) -> Self {
        match self.a {
            255 => self,
            0 => dst,
            a => {
                let inv = 255 - a;
                Self {
                    r: self.r.saturating_add(mul_div_255(dst.r, inv)),
                    g: self.g.saturating_add(mul_div_255(dst.g, inv)),
                    b: self.b.saturating_add(mul_div_255(dst.b, inv)),
                    a: a.saturating_add(mul_div_255(dst.a, inv)),
                }
            }
        }
    }

    pub fn demultiply(self) -> Color {
        if self.a == 0 {
            return Color::TRANSPARENT;
        }
        let a = self.a as u32;
        let undo = |c: u8| ((c as u32 * 255 + a / 2) / a).min(255) as u8;
        Color::rgba(undo(self.r), undo(self.g), undo(self.b), self.a)
    }
}

impl From<Color> for PremultipliedColor {
    fn from(color: Color) -> Self {
        color.premultiply()
    }
}

/// `x * y / 255`, rounded
#[inline]
fn mul_div_255(x: u8, y: u8) -> u8 {
    let t = x as u32 * y as u32 + 128;
    ((t + (t >> 8)) >> 8) as u8
}

pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let c = v * s;
    let h_prime = (h * 6.0) % 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}
