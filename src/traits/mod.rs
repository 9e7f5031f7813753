pub mod surface_factory;

pub use surface_factory::*;
