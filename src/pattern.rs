// pattern.rs - Test patterns for exercising a freshly created surface
use serde::Serialize;

use crate::core::{BitmapSurface, DrawOp};
use crate::math::{hsv_to_rgb, Color};

#[derive(clap::ValueEnum, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    /// Leave the surface untouched
    #[default]
    None,
    /// Horizontal hue sweep fading to transparent toward the bottom
    Gradient,
    /// A few overlapping shapes, some semi-transparent
    Shapes,
}

/// Draw `pattern` onto the whole surface
pub fn draw(surface: &mut BitmapSurface, pattern: Pattern) {
    match pattern {
        Pattern::None => {}
        Pattern::Gradient => draw_gradient(surface),
        Pattern::Shapes => {
            let ops = shapes(surface.width(), surface.height());
            surface.context().apply_all(&ops);
        }
    }
}

fn draw_gradient(surface: &mut BitmapSurface) {
    let (width, height) = (surface.width(), surface.height());
    let mut ctx = surface.context();

    for x in 0..width {
        let hue = x as f32 / width as f32;
        for y in 0..height {
            let alpha = 1.0 - y as f32 / height as f32;
            let color = Color::from_f32(hsv_to_rgb(hue, 1.0, 1.0), alpha);
            ctx.set_pixel(x as i32, y as i32, color);
        }
    }
}

/// Shapes scaled to the surface size
pub fn shapes(width: u32, height: u32) -> Vec<DrawOp> {
    let w = width as i32;
    let h = height as i32;
    let min = width.min(height);

    vec![
        DrawOp::Clear(Color::WHITE),
        DrawOp::Rect {
            x: w / 8,
            y: h / 8,
            width: width / 2,
            height: height / 2,
            color: Color::RED,
        },
        DrawOp::FilledCircle {
            cx: w / 2,
            cy: h / 2,
            radius: min / 4,
            color: Color::rgba(0, 0, 255, 128),
        },
        DrawOp::Circle {
            cx: w / 2,
            cy: h / 2,
            radius: min / 3,
            color: Color::BLACK,
        },
        DrawOp::Line {
            x1: 0,
            y1: 0,
            x2: w - 1,
            y2: h - 1,
            color: Color::GREEN,
        },
    ]
}
