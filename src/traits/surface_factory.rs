use crate::error::Result;
use crate::types::SurfaceSize;

/// Something that turns a requested size into a drawable surface
pub trait SurfaceFactory {
    type Surface;

    /// Create a fresh surface; each call returns an independent buffer
    fn create_surface(&self, size: SurfaceSize) -> Result<Self::Surface>;
}
