#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_new_stores_coordinates() {
    let p = pt(3.5, -2.0);
    assert_eq!(p.x, 3.5);
    assert_eq!(p.y, -2.0);
}

#[test]
fn point_is_copy() {
    let a = pt(1.0, 2.0);
    let b = a;
    assert_eq!(a, b);
}

// =============================================================
// Stroke
// =============================================================

#[test]
fn stroke_start_has_single_point() {
    let stroke = Stroke::start(pt(4.0, 5.0), 3.0);
    assert_eq!(stroke.points, vec![pt(4.0, 5.0)]);
}

#[test]
fn stroke_start_captures_thickness() {
    let stroke = Stroke::start(pt(0.0, 0.0), 10.0);
    assert_eq!(stroke.thickness, 10.0);
}

#[test]
fn stroke_extend_appends_in_order() {
    let mut stroke = Stroke::start(pt(0.0, 0.0), 3.0);
    stroke.extend(pt(1.0, 1.0));
    stroke.extend(pt(2.0, 4.0));
    assert_eq!(stroke.points, vec![pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 4.0)]);
}

#[test]
fn stroke_ids_are_unique() {
    let a = Stroke::start(pt(0.0, 0.0), 3.0);
    let b = Stroke::start(pt(0.0, 0.0), 3.0);
    assert_ne!(a.id, b.id);
}

// =============================================================
// Sticker
// =============================================================

#[test]
fn sticker_place_captures_fields() {
    let sticker = Sticker::place(pt(10.0, 10.0), "★", 10.0);
    assert_eq!(sticker.anchor, pt(10.0, 10.0));
    assert_eq!(sticker.glyph, "★");
    assert_eq!(sticker.size, 10.0);
}

#[test]
fn sticker_ids_are_unique() {
    let a = Sticker::place(pt(0.0, 0.0), "★", 10.0);
    let b = Sticker::place(pt(0.0, 0.0), "★", 10.0);
    assert_ne!(a.id, b.id);
}

// =============================================================
// Drawable
// =============================================================

#[test]
fn drawable_id_matches_inner_stroke() {
    let stroke = Stroke::start(pt(0.0, 0.0), 3.0);
    let id = stroke.id;
    assert_eq!(Drawable::Stroke(stroke).id(), id);
}

#[test]
fn drawable_id_matches_inner_sticker() {
    let sticker = Sticker::place(pt(0.0, 0.0), "★", 10.0);
    let id = sticker.id;
    assert_eq!(Drawable::Sticker(sticker).id(), id);
}

#[test]
fn drawable_as_stroke_on_stroke() {
    let drawable = Drawable::Stroke(Stroke::start(pt(0.0, 0.0), 3.0));
    assert!(drawable.as_stroke().is_some());
    assert!(drawable.as_sticker().is_none());
}

#[test]
fn drawable_as_sticker_on_sticker() {
    let drawable = Drawable::Sticker(Sticker::place(pt(0.0, 0.0), "★", 10.0));
    assert!(drawable.as_sticker().is_some());
    assert!(drawable.as_stroke().is_none());
}
