use std::collections::TryReserveError;

use crate::core::surface::BitmapSurface;
use crate::error::{Result, SurfaceError};
use crate::traits::SurfaceFactory;
use crate::types::{PixelFormatDescriptor, SurfaceSize};

/// Creates bitmap surfaces in the canonical pixel format.
///
/// Holds no state besides an optional allocation ceiling, so one factory can
/// be shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenericBitmapSurfaceFactory {
    byte_limit: Option<u64>,
}

impl GenericBitmapSurfaceFactory {
    pub const fn new() -> Self {
        Self { byte_limit: None }
    }

    /// Factory that refuses surfaces whose buffer would exceed `bytes`
    pub const fn with_byte_limit(bytes: u64) -> Self {
        Self { byte_limit: Some(bytes) }
    }

    pub fn byte_limit(&self) -> Option<u64> {
        self.byte_limit
    }

    pub fn pixel_format(&self) -> &'static PixelFormatDescriptor {
        &PixelFormatDescriptor::CANONICAL
    }

    /// Allocate a zeroed surface of `size`.
    ///
    /// Fails with [`SurfaceError::Allocation`] when the byte count overflows,
    /// exceeds the configured limit, or the allocator refuses. Never retries.
    pub fn create_surface(&self, size: SurfaceSize) -> Result<BitmapSurface> {
        let bytes = size.byte_len().ok_or_else(|| {
            allocation_failed(None, format!("{}x{} overflows", size.width(), size.height()))
        })?;

        if let Some(limit) = self.byte_limit {
            if bytes > limit {
                return Err(allocation_failed(
                    Some(bytes),
                    format!("exceeds configured limit of {limit} bytes"),
                ));
            }
        }

        let bytes_per_row = usize::try_from(size.width() as u64 * 4)
            .map_err(|_| allocation_failed(Some(bytes), "row stride does not fit in usize"))?;
        let pixels = usize::try_from(size.pixel_count())
            .map_err(|_| allocation_failed(Some(bytes), "pixel count does not fit in usize"))?;

        let words = allocate_zeroed(pixels)
            .map_err(|err| allocation_failed(Some(bytes), err.to_string()))?;

        log::debug!(
            "created {}x{} surface: {} bytes, stride {}",
            size.width(),
            size.height(),
            bytes,
            bytes_per_row
        );

        Ok(BitmapSurface::from_zeroed(words, size, bytes_per_row))
    }
}

impl SurfaceFactory for GenericBitmapSurfaceFactory {
    type Surface = BitmapSurface;

    fn create_surface(&self, size: SurfaceSize) -> Result<BitmapSurface> {
        GenericBitmapSurfaceFactory::create_surface(self, size)
    }
}

/// Create a surface for signed dimensions.
///
/// Non-positive dimensions are rejected with [`SurfaceError::InvalidSize`]
/// before anything is allocated.
pub fn create_surface(width: i64, height: i64) -> Result<BitmapSurface> {
    let size = SurfaceSize::new(width, height)?;
    GenericBitmapSurfaceFactory::new().create_surface(size)
}

fn allocate_zeroed(pixels: usize) -> std::result::Result<Vec<u32>, TryReserveError> {
    let mut words = Vec::new();
    words.try_reserve_exact(pixels)?;
    words.resize(pixels, 0);
    Ok(words)
}

fn allocation_failed(bytes: Option<u64>, reason: impl Into<String>) -> SurfaceError {
    let reason = reason.into();
    match bytes {
        Some(bytes) => log::warn!("surface allocation of {bytes} bytes failed: {reason}"),
        None => log::warn!("surface allocation failed: {reason}"),
    }
    SurfaceError::Allocation { bytes, reason }
}
