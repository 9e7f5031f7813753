pub mod cli;
pub mod core;
pub mod error;
pub mod math;
pub mod pattern;
pub mod traits;
pub mod types;

pub use crate::core::{
    create_surface, BitmapSurface, DrawOp, DrawingContext, GenericBitmapSurfaceFactory,
};
pub use error::{Result, SurfaceError};
pub use math::{Color, PremultipliedColor};
pub use traits::SurfaceFactory;
pub use types::{AlphaInfo, ByteOrder, ColorSpace, PixelFormatDescriptor, SurfaceSize};
