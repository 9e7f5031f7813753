use serde::Serialize;

use crate::error::{Result, SurfaceError};

/// Requested surface dimensions in device pixels. Both are always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SurfaceSize {
    width: u32,
    height: u32,
}

impl SurfaceSize {
    /// Validate signed dimensions
    pub fn new(width: i64, height: i64) -> Result<Self> {
        let invalid = || SurfaceError::InvalidSize { width, height };

        if width <= 0 || height <= 0 {
            return Err(invalid());
        }
        let w = u32::try_from(width).map_err(|_| invalid())?;
        let h = u32::try_from(height).map_err(|_| invalid())?;

        Ok(Self { width: w, height: h })
    }

    /// Build from a fractional size, rounding each dimension up to whole pixels
    pub fn from_f64(width: f64, height: f64) -> Result<Self> {
        let invalid = || SurfaceError::InvalidSize {
            width: width as i64,
            height: height as i64,
        };

        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(invalid());
        }
        if width.ceil() > u32::MAX as f64 || height.ceil() > u32::MAX as f64 {
            return Err(invalid());
        }

        Ok(Self {
            width: width.ceil() as u32,
            height: height.ceil() as u32,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Row stride for the canonical format, tightly packed
    pub fn bytes_per_row(&self) -> Option<u64> {
        (self.width as u64).checked_mul(PixelFormatDescriptor::CANONICAL.bytes_per_pixel() as u64)
    }

    /// Total buffer size in bytes; `None` if it does not fit in a `u64`
    pub fn byte_len(&self) -> Option<u64> {
        self.bytes_per_row()?.checked_mul(self.height as u64)
    }
}

/// Where alpha lives in the pixel word and whether color is premultiplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlphaInfo {
    /// Alpha in the high byte of the word, color premultiplied by alpha
    PremultipliedFirst,
    /// Alpha in the low byte of the word, color premultiplied by alpha
    PremultipliedLast,
}

impl AlphaInfo {
    pub const fn bits(self) -> u32 {
        match self {
            AlphaInfo::PremultipliedLast => 1,
            AlphaInfo::PremultipliedFirst => 2,
        }
    }
}

/// Byte order of the 32-bit pixel word in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ByteOrder {
    Little32,
    Big32,
}

impl ByteOrder {
    pub const fn bits(self) -> u32 {
        match self {
            ByteOrder::Little32 => 2 << 12,
            ByteOrder::Big32 => 4 << 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorSpace {
    /// Device-independent sRGB
    Srgb,
    /// RGB as interpreted by a particular display; never chosen by the factory
    DeviceRgb,
}

/// Layout of every pixel in a surface.
///
/// Only [`PixelFormatDescriptor::CANONICAL`] is ever produced by the factory:
/// 8-bit components, 4 per pixel, alpha first and premultiplied, with the
/// 32-bit word stored little-endian, so memory reads B, G, R, A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PixelFormatDescriptor {
    pub bits_per_component: u32,
    pub components_per_pixel: u32,
    pub bits_per_pixel: u32,
    pub alpha_info: AlphaInfo,
    pub byte_order: ByteOrder,
    pub color_space: ColorSpace,
}

impl PixelFormatDescriptor {
    pub const CANONICAL: Self = Self {
        bits_per_component: 8,
        components_per_pixel: 4,
        bits_per_pixel: 32,
        alpha_info: AlphaInfo::PremultipliedFirst,
        byte_order: ByteOrder::Little32,
        color_space: ColorSpace::Srgb,
    };

    pub const fn bytes_per_pixel(&self) -> u32 {
        self.bits_per_pixel / 8
    }

    /// Combined alpha and byte-order flags, as native 2D backends expect them
    pub const fn bitmap_info(&self) -> u32 {
        self.alpha_info.bits() | self.byte_order.bits()
    }
}

impl Default for PixelFormatDescriptor {
    fn default() -> Self {
        Self::CANONICAL
    }
}
