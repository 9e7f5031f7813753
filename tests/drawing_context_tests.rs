use bitmap_surface::{create_surface, Color, DrawOp, PremultipliedColor};

// ============================================================================
// Memory layout
// ============================================================================

#[test]
fn test_opaque_pixel_bytes_are_bgra() {
    let mut surface = create_surface(2, 2).unwrap();
    surface.context().clear(Color::rgb(255, 128, 64));

    let data = surface.data();
    for px in data.chunks_exact(4) {
        assert_eq!(px, &[64, 128, 255, 255]);
    }
}

#[test]
fn test_semi_transparent_bytes_are_premultiplied() {
    let mut surface = create_surface(1, 1).unwrap();
    surface.context().set_pixel(0, 0, Color::rgba(255, 255, 0, 128));

    // B, G, R, A with color scaled by alpha
    assert_eq!(surface.data(), &[0, 128, 128, 128]);
    assert_eq!(u32::from_le(surface.words()[0]), 0x8080_8000);
}

#[test]
fn test_rows_are_tightly_packed() {
    let mut surface = create_surface(3, 3).unwrap();
    surface.context().hline(0, 1, 3, Color::BLUE);

    assert!(surface.row(0).unwrap().iter().all(|&b| b == 0));
    assert_eq!(surface.row(1).unwrap(), &[255, 0, 0, 255, 255, 0, 0, 255, 255, 0, 0, 255]);
    assert!(surface.row(2).unwrap().iter().all(|&b| b == 0));
}

// ============================================================================
// Compositing
// ============================================================================

#[test]
fn test_source_over_on_opaque_background() {
    let mut surface = create_surface(4, 4).unwrap();
    {
        let mut ctx = surface.context();
        ctx.clear(Color::BLACK);
        ctx.fill_rect(0, 0, 4, 4, Color::rgba(255, 255, 255, 128));
    }

    let px = surface.pixel(2, 2).unwrap();
    assert_eq!(px, PremultipliedColor { r: 128, g: 128, b: 128, a: 255 });
}

#[test]
fn test_source_over_on_transparent_background() {
    let mut surface = create_surface(1, 1).unwrap();
    surface.context().set_pixel(0, 0, Color::rgba(0, 255, 0, 64));

    let px = surface.pixel(0, 0).unwrap();
    assert_eq!(px.a, 64);
    assert_eq!(px.g, 64);
    assert_eq!(px.demultiply(), Color::rgba(0, 255, 0, 64));
}

#[test]
fn test_to_rgba8_for_image_export() {
    let mut surface = create_surface(2, 1).unwrap();
    {
        let mut ctx = surface.context();
        ctx.set_pixel(0, 0, Color::rgb(10, 20, 30));
        ctx.set_pixel(1, 0, Color::rgba(200, 100, 0, 255));
    }

    assert_eq!(surface.to_rgba8(), vec![10, 20, 30, 255, 200, 100, 0, 255]);
}

// ============================================================================
// Draw operations
// ============================================================================

#[test]
fn test_draw_ops_match_direct_calls() {
    let ops = [
        DrawOp::Clear(Color::WHITE),
        DrawOp::Rect { x: 2, y: 2, width: 4, height: 3, color: Color::RED },
        DrawOp::VLine { x: 7, y: 0, length: 8, color: Color::BLUE },
        DrawOp::Line { x1: 0, y1: 7, x2: 7, y2: 0, color: Color::GREEN },
        DrawOp::FilledCircle { cx: 4, cy: 4, radius: 2, color: Color::rgba(0, 0, 0, 100) },
        DrawOp::Circle { cx: 3, cy: 3, radius: 3, color: Color::BLACK },
    ];

    let mut queued = create_surface(8, 8).unwrap();
    queued.context().apply_all(&ops);

    let mut direct = create_surface(8, 8).unwrap();
    {
        let mut ctx = direct.context();
        ctx.clear(Color::WHITE);
        ctx.fill_rect(2, 2, 4, 3, Color::RED);
        ctx.vline(7, 0, 8, Color::BLUE);
        ctx.line(0, 7, 7, 0, Color::GREEN);
        ctx.fill_circle(4, 4, 2, Color::rgba(0, 0, 0, 100));
        ctx.circle(3, 3, 3, Color::BLACK);
    }

    assert_eq!(queued.data(), direct.data());
}

#[test]
fn test_drawing_off_surface_is_clipped() {
    let mut surface = create_surface(4, 4).unwrap();
    {
        let mut ctx = surface.context();
        ctx.set_pixel(-1, 0, Color::WHITE);
        ctx.set_pixel(4, 0, Color::WHITE);
        ctx.set_pixel(0, 4, Color::WHITE);
        ctx.fill_rect(i32::MAX - 1, i32::MAX - 1, u32::MAX, u32::MAX, Color::WHITE);
        ctx.fill_circle(-100, -100, 10, Color::WHITE);
        ctx.circle(100, 100, 5, Color::WHITE);
    }

    assert!(surface.is_clear());
}

#[test]
fn test_circle_outline_leaves_center_untouched() {
    let mut surface = create_surface(11, 11).unwrap();
    surface.context().circle(5, 5, 4, Color::RED);

    assert_eq!(surface.pixel(5, 5), Some(PremultipliedColor::TRANSPARENT));
    assert_eq!(surface.pixel(9, 5), Some(Color::RED.premultiply()));
    assert_eq!(surface.pixel(5, 1), Some(Color::RED.premultiply()));
}

#[test]
fn test_fill_rect_counts() {
    let mut surface = create_surface(10, 10).unwrap();
    surface.context().fill_rect(3, 3, 4, 5, Color::GREEN);
    assert_eq!(surface.opaque_pixel_count(), 20);
}

// ============================================================================
// Extreme coordinates
// ============================================================================

#[test]
fn test_circle_with_center_at_coordinate_limits_is_clipped() {
    let mut surface = create_surface(4, 4).unwrap();
    {
        let mut ctx = surface.context();
        ctx.circle(i32::MAX, 0, 1, Color::WHITE);
        ctx.circle(i32::MIN, 0, 1, Color::WHITE);
        ctx.circle(0, i32::MIN, 5, Color::WHITE);
        ctx.circle(i32::MAX, i32::MAX, u32::MAX, Color::WHITE);
        ctx.circle(1, 1, u32::MAX, Color::WHITE);
    }

    assert!(surface.is_clear());
}

#[test]
fn test_circle_partly_on_surface_near_limits() {
    let mut surface = create_surface(4, 4).unwrap();
    surface.context().circle(-3, 1, 4, Color::RED);

    // Rightmost point of the outline is (cx + r, cy)
    assert_eq!(surface.pixel(1, 1), Some(Color::RED.premultiply()));
    assert_eq!(surface.pixel(3, 3), Some(PremultipliedColor::TRANSPARENT));
}

#[test]
fn test_fill_circle_with_huge_radius_covers_surface() {
    let mut surface = create_surface(4, 4).unwrap();
    surface.context().fill_circle(0, 0, 3_000_000_000, Color::RED);
    assert_eq!(surface.opaque_pixel_count(), 16);

    let mut far = create_surface(4, 4).unwrap();
    far.context().fill_circle(i32::MIN, 0, u32::MAX, Color::BLUE);
    assert_eq!(far.opaque_pixel_count(), 16);
}

#[test]
fn test_fill_circle_far_off_surface_is_clipped() {
    let mut surface = create_surface(4, 4).unwrap();
    surface.context().fill_circle(i32::MIN, i32::MIN, u32::MAX / 2, Color::RED);
    assert!(surface.is_clear());
}

#[test]
fn test_line_with_extreme_endpoints() {
    let mut diagonal = create_surface(4, 4).unwrap();
    diagonal.context().line(i32::MIN, i32::MIN, i32::MAX, i32::MAX, Color::GREEN);
    for i in 0..4 {
        assert_eq!(diagonal.pixel(i, i), Some(Color::GREEN.premultiply()));
    }
    assert_eq!(diagonal.opaque_pixel_count(), 4);

    let mut horizontal = create_surface(4, 4).unwrap();
    horizontal.context().line(i32::MAX, 2, i32::MIN, 2, Color::BLUE);
    assert_eq!(horizontal.opaque_pixel_count(), 4);
    assert!((0..4).all(|x| horizontal.pixel(x, 2) == Some(Color::BLUE.premultiply())));

    let mut vertical = create_surface(4, 4).unwrap();
    vertical.context().line(1, i32::MIN, 1, i32::MAX, Color::RED);
    assert_eq!(vertical.opaque_pixel_count(), 4);
}
