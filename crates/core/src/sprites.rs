//! Placeholder sprite drawing.
//!
//! Each sprite is a handful of `embedded-graphics` primitives on a
//! transparent background. The `draw_*` functions work against any
//! [`DrawTarget`] with [`Rgba`] pixels and size themselves from the target's
//! bounding box; the plain functions allocate an [`RgbaCanvas`] and draw into
//! it.

use core::convert::Infallible;

use embedded_graphics::geometry::Angle;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Arc, Ellipse, Line, Polyline, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle,
    StrokeAlignment, Triangle,
};

use crate::canvas::RgbaCanvas;
use crate::error::EncodeError;
use crate::palette::{ElementSymbol, ICON_SIZE};
use crate::raster::Rgba;

/// Glyph drawn for a mutation sprite. Names without a dedicated glyph get
/// the generic pentagon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationGlyph {
    Gigantism,
    Unstable,
    Weakness,
    Crystallize,
    Regenerate,
    Toxic,
    Armor,
    Generic,
}

impl MutationGlyph {
    pub fn for_name(name: &str) -> Self {
        match name {
            "gigantism" => MutationGlyph::Gigantism,
            "unstable" => MutationGlyph::Unstable,
            "weakness" => MutationGlyph::Weakness,
            "crystallize" => MutationGlyph::Crystallize,
            "regenerate" => MutationGlyph::Regenerate,
            "toxic" => MutationGlyph::Toxic,
            "armor" => MutationGlyph::Armor,
            _ => MutationGlyph::Generic,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MutationGlyph::Gigantism => "gigantism",
            MutationGlyph::Unstable => "unstable",
            MutationGlyph::Weakness => "weakness",
            MutationGlyph::Crystallize => "crystallize",
            MutationGlyph::Regenerate => "regenerate",
            MutationGlyph::Toxic => "toxic",
            MutationGlyph::Armor => "armor",
            MutationGlyph::Generic => "generic",
        }
    }
}

// ─── Canvas entry points ────────────────────────────────────────────────────

/// Round body in `body` with an `accent` rim, two eyes and a mouth.
pub fn monster_body(body: Rgba, accent: Rgba, size: u32) -> Result<RgbaCanvas, EncodeError> {
    paint(size, size, |c| draw_monster_body(c, body, accent))
}

/// Translucent aura in `color` with the element's glyph on top.
pub fn element_overlay(symbol: ElementSymbol, color: Rgba, size: u32) -> Result<RgbaCanvas, EncodeError> {
    paint(size, size, |c| draw_element_overlay(c, symbol, color))
}

pub fn mutation_sprite(glyph: MutationGlyph, size: u32) -> Result<RgbaCanvas, EncodeError> {
    paint(size, size, |c| draw_mutation(c, glyph))
}

/// Red heart, 32x32.
pub fn health_icon() -> Result<RgbaCanvas, EncodeError> {
    paint(ICON_SIZE, ICON_SIZE, |c| draw_health_icon(c))
}

/// Yellow five-pointed star, 32x32.
pub fn energy_icon() -> Result<RgbaCanvas, EncodeError> {
    paint(ICON_SIZE, ICON_SIZE, |c| draw_energy_icon(c))
}

fn paint<F>(width: u32, height: u32, draw: F) -> Result<RgbaCanvas, EncodeError>
where
    F: FnOnce(&mut RgbaCanvas) -> Result<(), Infallible>,
{
    let mut canvas = RgbaCanvas::new(width, height)?;
    match draw(&mut canvas) {
        Ok(()) => Ok(canvas),
        Err(never) => match never {},
    }
}

// ─── Sprites ────────────────────────────────────────────────────────────────

pub fn draw_monster_body<D>(target: &mut D, body: Rgba, accent: Rgba) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgba>,
{
    let s = edge(target);
    let c = s / 2;
    let r = s / 4;

    bbox_ellipse(c - r, c - r, c + r, c + r)
        .into_styled(filled_outlined(body, accent, 2))
        .draw(target)?;

    let eye_y = c - r / 2;
    let eye_r = 3;
    bbox_ellipse(c - 8, eye_y - eye_r, c - 2, eye_y + eye_r)
        .into_styled(filled(Rgba::BLACK))
        .draw(target)?;
    bbox_ellipse(c + 2, eye_y - eye_r, c + 8, eye_y + eye_r)
        .into_styled(filled(Rgba::BLACK))
        .draw(target)?;

    Line::new(Point::new(c - 6, c + 4), Point::new(c + 6, c + 4))
        .into_styled(stroke(Rgba::BLACK, 1))
        .draw(target)
}

pub fn draw_element_overlay<D>(
    target: &mut D,
    symbol: ElementSymbol,
    color: Rgba,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgba>,
{
    let s = edge(target);
    let c = s / 2;
    let center = Point::new(c, c);

    let aura = s / 3;
    bbox_ellipse(c - aura, c - aura, c + aura, c + aura)
        .into_styled(filled_outlined(color.with_alpha(128), color.with_alpha(200), 1))
        .draw(target)?;

    match symbol {
        ElementSymbol::Flame => Triangle::new(
            Point::new(c, c - 12),
            Point::new(c - 8, c + 8),
            Point::new(c + 8, c + 8),
        )
        .into_styled(filled(color))
        .draw(target),
        ElementSymbol::Snowflake => {
            for deg in (0..360).step_by(60) {
                Line::new(center, polar(center, 10.0, deg as f32))
                    .into_styled(stroke(color, 1))
                    .draw(target)?;
            }
            Ok(())
        }
        ElementSymbol::Lightning => {
            let bolt = [
                Point::new(c, c - 10),
                Point::new(c + 4, c - 2),
                Point::new(c - 2, c),
                Point::new(c + 2, c + 8),
            ];
            Polyline::new(&bolt).into_styled(stroke(color, 2)).draw(target)
        }
        ElementSymbol::Leaf => bbox_ellipse(c - 6, c - 10, c + 6, c + 4)
            .into_styled(filled(color))
            .draw(target),
        ElementSymbol::Swirl => {
            Arc::new(Point::new(c - 8, c - 8), 17, Angle::from_degrees(0.0), Angle::from_degrees(180.0))
                .into_styled(stroke(color, 2))
                .draw(target)
        }
        ElementSymbol::Star => fill_star(target, center, 12.0, 6.0, color),
        ElementSymbol::Gear => {
            bbox_ellipse(c - 8, c - 8, c + 8, c + 8)
                .into_styled(outlined(color, 2))
                .draw(target)?;
            for deg in (0..360).step_by(90) {
                let tooth = polar(center, 10.0, deg as f32);
                bbox_rect(tooth.x - 2, tooth.y - 2, tooth.x + 2, tooth.y + 2)
                    .into_styled(filled(color))
                    .draw(target)?;
            }
            Ok(())
        }
        ElementSymbol::Wave => {
            let wave = [
                Point::new(c - 10, c),
                Point::new(c - 5, c - 3),
                Point::new(c, c),
                Point::new(c + 5, c - 3),
                Point::new(c + 10, c),
            ];
            Polyline::new(&wave).into_styled(stroke(color, 2)).draw(target)
        }
        ElementSymbol::Spiral => {
            // 20 samples, 18 degrees apart, radius growing by half a pixel.
            let spiral: Vec<Point> = (0..20)
                .map(|i| polar(center, i as f32 * 0.5, i as f32 * 18.0))
                .collect();
            Polyline::new(&spiral).into_styled(stroke(color, 1)).draw(target)
        }
    }
}

/// Mutation glyphs are laid out on a 64-pixel grid and scaled to the target.
pub fn draw_mutation<D>(target: &mut D, glyph: MutationGlyph) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgba>,
{
    let s = edge(target);
    let g = |v: i32| v * s / 64;
    let p = |x: i32, y: i32| Point::new(g(x), g(y));

    match glyph {
        MutationGlyph::Gigantism => {
            let color = Rgba::opaque(255, 100, 100);
            bbox_ellipse(g(8), g(8), s - g(8), s - g(8))
                .into_styled(outlined(color, 2))
                .draw(target)?;
            Line::new(Point::new(s / 2, g(4)), Point::new(s / 2, g(12)))
                .into_styled(stroke(color, 2))
                .draw(target)?;
            Line::new(Point::new(g(4), s / 2), Point::new(g(12), s / 2))
                .into_styled(stroke(color, 2))
                .draw(target)
        }
        MutationGlyph::Unstable => {
            let color = Rgba::new(200, 50, 50, 200);
            Line::new(p(8, 8), Point::new(s - g(8), s - g(8)))
                .into_styled(stroke(color, 2))
                .draw(target)?;
            Line::new(Point::new(s - g(8), g(8)), Point::new(g(8), s - g(8)))
                .into_styled(stroke(color, 2))
                .draw(target)?;
            Line::new(Point::new(s / 2, g(4)), Point::new(s / 2, s - g(4)))
                .into_styled(stroke(color, 1))
                .draw(target)
        }
        MutationGlyph::Weakness => {
            // Down arrow: head triangle plus a shaft.
            let color = Rgba::opaque(100, 100, 255);
            let (ax, ay) = (s / 2, s / 2);
            Triangle::new(
                Point::new(ax, ay - g(8)),
                Point::new(ax - g(6), ay),
                Point::new(ax + g(6), ay),
            )
            .into_styled(filled(color))
            .draw(target)?;
            bbox_rect(ax - g(2), ay, ax + g(2), ay + g(8))
                .into_styled(filled(color))
                .draw(target)
        }
        MutationGlyph::Crystallize => fill_convex(
            target,
            &[p(32, 16), p(48, 32), p(32, 48), p(16, 32)],
            Rgba::opaque(100, 150, 255),
        ),
        MutationGlyph::Regenerate => {
            let color = Rgba::opaque(0, 255, 0);
            let diameter = (g(48) - g(16) + 1).max(0) as u32;
            Arc::new(p(16, 16), diameter, Angle::from_degrees(0.0), Angle::from_degrees(180.0))
                .into_styled(stroke(color, 2))
                .draw(target)?;
            Line::new(p(32, 8), p(32, 18))
                .into_styled(stroke(color, 2))
                .draw(target)
        }
        MutationGlyph::Toxic => {
            let color = Rgba::opaque(128, 255, 0);
            bbox_ellipse(g(16), g(16), g(48), g(48))
                .into_styled(outlined(color, 2))
                .draw(target)?;
            Line::new(p(16, 32), p(48, 32))
                .into_styled(stroke(color, 1))
                .draw(target)?;
            Line::new(p(32, 16), p(32, 48))
                .into_styled(stroke(color, 1))
                .draw(target)
        }
        MutationGlyph::Armor => {
            let color = Rgba::opaque(192, 192, 192);
            bbox_rect(g(20), g(20), g(44), g(44))
                .into_styled(outlined(color, 2))
                .draw(target)?;
            bbox_rect(g(24), g(24), g(40), g(40))
                .into_styled(outlined(color, 1))
                .draw(target)
        }
        MutationGlyph::Generic => fill_convex(
            target,
            &[p(32, 10), p(50, 30), p(40, 50), p(24, 50), p(14, 30)],
            Rgba::opaque(200, 100, 100),
        ),
    }
}

pub fn draw_health_icon<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgba>,
{
    let red = Rgba::opaque(255, 0, 0);
    bbox_ellipse(4, 6, 12, 14).into_styled(filled(red)).draw(target)?;
    bbox_ellipse(12, 6, 20, 14).into_styled(filled(red)).draw(target)?;
    Triangle::new(Point::new(4, 14), Point::new(12, 20), Point::new(20, 14))
        .into_styled(filled(red))
        .draw(target)
}

pub fn draw_energy_icon<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgba>,
{
    fill_star(target, Point::new(16, 16), 12.0, 6.0, Rgba::opaque(255, 255, 0))
}

// ─── Shape helpers ──────────────────────────────────────────────────────────

fn edge<D: Dimensions>(target: &D) -> i32 {
    let size = target.bounding_box().size;
    i32::try_from(size.width.min(size.height)).unwrap_or(i32::MAX)
}

/// Ellipse inscribed in the inclusive box (`x0`, `y0`)..=(`x1`, `y1`).
fn bbox_ellipse(x0: i32, y0: i32, x1: i32, y1: i32) -> Ellipse {
    Ellipse::new(Point::new(x0, y0), bbox_size(x0, y0, x1, y1))
}

/// Rectangle covering the inclusive box (`x0`, `y0`)..=(`x1`, `y1`).
fn bbox_rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Rectangle {
    Rectangle::new(Point::new(x0, y0), bbox_size(x0, y0, x1, y1))
}

fn bbox_size(x0: i32, y0: i32, x1: i32, y1: i32) -> Size {
    Size::new((x1 - x0 + 1).max(0) as u32, (y1 - y0 + 1).max(0) as u32)
}

fn filled(color: Rgba) -> PrimitiveStyle<Rgba> {
    PrimitiveStyle::with_fill(color)
}

fn stroke(color: Rgba, width: u32) -> PrimitiveStyle<Rgba> {
    PrimitiveStyle::with_stroke(color, width)
}

// Closed-shape outlines sit inside the box, like a bounding-box outline.
fn outlined(color: Rgba, width: u32) -> PrimitiveStyle<Rgba> {
    PrimitiveStyleBuilder::new()
        .stroke_color(color)
        .stroke_width(width)
        .stroke_alignment(StrokeAlignment::Inside)
        .build()
}

fn filled_outlined(fill: Rgba, outline: Rgba, width: u32) -> PrimitiveStyle<Rgba> {
    PrimitiveStyleBuilder::new()
        .fill_color(fill)
        .stroke_color(outline)
        .stroke_width(width)
        .stroke_alignment(StrokeAlignment::Inside)
        .build()
}

/// Point `radius` pixels from `center` at `degrees` (clockwise from +x,
/// since y grows downwards).
fn polar(center: Point, radius: f32, degrees: f32) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point::new(
        center.x + (radius * cos).round() as i32,
        center.y + (radius * sin).round() as i32,
    )
}

/// Fill a convex polygon as a triangle fan around its first vertex.
fn fill_convex<D>(target: &mut D, points: &[Point], color: Rgba) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgba>,
{
    let Some((&first, rest)) = points.split_first() else {
        return Ok(());
    };
    for pair in rest.windows(2) {
        Triangle::new(first, pair[0], pair[1])
            .into_styled(filled(color))
            .draw(target)?;
    }
    Ok(())
}

/// Ten-vertex star, first tip pointing up. The outline is star-shaped
/// around `center`, so a fan from the center covers it exactly.
fn fill_star<D>(
    target: &mut D,
    center: Point,
    outer: f32,
    inner: f32,
    color: Rgba,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgba>,
{
    let points: Vec<Point> = (0..10)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            polar(center, radius, i as f32 * 36.0 - 90.0)
        })
        .collect();
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        Triangle::new(center, a, b)
            .into_styled(filled(color))
            .draw(target)?;
    }
    Ok(())
}
