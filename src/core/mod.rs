pub mod context;
pub mod factory;
pub mod surface;

pub use context::{DrawOp, DrawingContext};
pub use factory::{create_surface, GenericBitmapSurfaceFactory};
pub use surface::BitmapSurface;
