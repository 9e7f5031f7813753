use crate::core::context::DrawingContext;
use crate::math::PremultipliedColor;
use crate::types::{ColorSpace, PixelFormatDescriptor, SurfaceSize};

/// In-memory bitmap render target.
///
/// Owns its pixel buffer exclusively; the buffer is freed when the surface is
/// dropped. The format is fixed at creation and never changes.
#[derive(Debug, PartialEq, Eq)]
pub struct BitmapSurface {
    /// One pixel word per pixel, stored little-endian
    words: Vec<u32>,
    size: SurfaceSize,
    bytes_per_row: usize,
    format: PixelFormatDescriptor,
}

impl BitmapSurface {
    /// Wrap an already zeroed buffer. The factory is the only caller and has
    /// checked that `words.len() == width * height`.
    pub(crate) fn from_zeroed(words: Vec<u32>, size: SurfaceSize, bytes_per_row: usize) -> Self {
        debug_assert_eq!(words.len() as u64, size.pixel_count());
        Self {
            words,
            size,
            bytes_per_row,
            format: PixelFormatDescriptor::CANONICAL,
        }
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width()
    }

    pub fn height(&self) -> u32 {
        self.size.height()
    }

    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    /// Length of the backing buffer in bytes
    pub fn byte_len(&self) -> usize {
        self.bytes_per_row * self.height() as usize
    }

    pub fn pixel_format(&self) -> &PixelFormatDescriptor {
        &self.format
    }

    pub fn color_space(&self) -> ColorSpace {
        self.format.color_space
    }

    /// Raw pixel bytes, B, G, R, A per pixel
    pub fn data(&self) -> &[u8] {
        bytemuck::cast_slice(&self.words)
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.words)
    }

    /// Pixel words as stored. Use `u32::from_le` to get the ARGB value.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Bytes of row `y`
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height() {
            return None;
        }
        let start = y as usize * self.bytes_per_row;
        Some(&self.data()[start..start + self.bytes_per_row])
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<PremultipliedColor> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let idx = y as usize * self.width() as usize + x as usize;
        Some(PremultipliedColor::from_word(u32::from_le(self.words[idx])))
    }

    /// Straight-alpha RGBA8 copy of the pixels, for building image assets
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.byte_len());
        for &word in &self.words {
            let color = PremultipliedColor::from_word(u32::from_le(word)).demultiply();
            out.extend_from_slice(&[color.r, color.g, color.b, color.a]);
        }
        out
    }

    /// True when every pixel is fully transparent black
    pub fn is_clear(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Number of pixels with non-zero alpha
    pub fn opaque_pixel_count(&self) -> usize {
        self.words
            .iter()
            .filter(|&&w| PremultipliedColor::from_word(u32::from_le(w)).a != 0)
            .count()
    }

    /// Drawing context bound to this surface's buffer
    pub fn context(&mut self) -> DrawingContext<'_> {
        let (width, height) = (self.width(), self.height());
        DrawingContext::new(&mut self.words, width, height, self.bytes_per_row, self.format)
    }
}
