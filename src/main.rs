use anyhow::{Context, Result};
use bitmap_surface::cli::Cli;
use bitmap_surface::pattern::{self, Pattern};
use bitmap_surface::{
    BitmapSurface, ColorSpace, GenericBitmapSurfaceFactory, PixelFormatDescriptor, SurfaceSize,
};
use clap::Parser;
use serde::Serialize;

/// What gets printed about a created surface
#[derive(Serialize, Debug)]
struct Report {
    width: u32,
    height: u32,
    bytes_per_row: usize,
    byte_len: usize,
    format: PixelFormatDescriptor,
    color_space: ColorSpace,
    bitmap_info: u32,
    pattern: Pattern,
    opaque_pixels: usize,
}

impl Report {
    fn new(surface: &BitmapSurface, pattern: Pattern) -> Self {
        let format = *surface.pixel_format();
        Self {
            width: surface.width(),
            height: surface.height(),
            bytes_per_row: surface.bytes_per_row(),
            byte_len: surface.byte_len(),
            format,
            color_space: surface.color_space(),
            bitmap_info: format.bitmap_info(),
            pattern,
            opaque_pixels: surface.opaque_pixel_count(),
        }
    }

    fn print_text(&self) {
        println!("Surface: {}x{}", self.width, self.height);
        println!("  Bytes per row: {}", self.bytes_per_row);
        println!("  Buffer size: {} bytes", self.byte_len);
        println!(
            "  Format: {} bpc, {} components, {} bpp, {:?}, {:?}",
            self.format.bits_per_component,
            self.format.components_per_pixel,
            self.format.bits_per_pixel,
            self.format.alpha_info,
            self.format.byte_order,
        );
        println!("  Color space: {:?}", self.color_space);
        println!("  Bitmap info: {:#06x}", self.bitmap_info);
        println!("  Pattern: {:?} ({} non-transparent pixels)", self.pattern, self.opaque_pixels);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let factory = match cli.max_bytes {
        Some(limit) => GenericBitmapSurfaceFactory::with_byte_limit(limit),
        None => GenericBitmapSurfaceFactory::new(),
    };

    let size = SurfaceSize::new(cli.width, cli.height).context("Invalid surface size")?;
    let mut surface = factory
        .create_surface(size)
        .context(format!("Failed to create {}x{} surface", cli.width, cli.height))?;

    pattern::draw(&mut surface, cli.pattern);

    let report = Report::new(&surface, cli.pattern);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print_text();
    }

    Ok(())
}
