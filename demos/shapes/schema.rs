//! A tagged-union schema: shapes that are either circles or rectangles,
//! dispatched on their `type` field.
#![allow(dead_code)]

use mon_decode::{
    fail, from_key, integer, literal, map2, map_n, string, succeed, Decoder, Value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Circle {
        center: Point,
        radius: i64,
        color: String,
        visible: bool,
    },
    Rectangle {
        top_left: Point,
        bottom_right: Point,
        color: String,
        visible: bool,
    },
}

pub fn point() -> Decoder<Value, Point> {
    map2(
        from_key("x", integer()),
        from_key("y", integer()),
        |x, y| Point { x, y },
    )
    .named("point")
}

/// Colors are stored upper-cased.
pub fn color() -> Decoder<Value, String> {
    string().map(|s| s.to_uppercase())
}

pub fn visibility() -> Decoder<Value, bool> {
    literal::<Value>("visible").replace_with(true)
        | literal::<Value>("invisible").replace_with(false)
}

pub fn circle() -> Decoder<Value, Shape> {
    map_n(
        (
            from_key("center", point()),
            from_key("radius", integer()),
            from_key("color", color()),
            from_key("status", visibility()),
        ),
        |(center, radius, color, visible)| Shape::Circle {
            center,
            radius,
            color,
            visible,
        },
    )
    .named("circle")
}

pub fn rectangle() -> Decoder<Value, Shape> {
    map_n(
        (
            from_key("topLeft", point()),
            from_key("width", integer()),
            from_key("height", integer()),
            from_key("color", color()),
            from_key("status", visibility()),
        ),
        |fields| fields,
    )
    .and_then(|(top_left, width, height, color, visible): (Point, i64, i64, String, bool)| {
        match (top_left.x.checked_add(width), top_left.y.checked_add(height)) {
            (Some(x), Some(y)) => succeed(Shape::Rectangle {
                top_left,
                bottom_right: Point { x, y },
                color,
                visible,
            }),
            _ => fail("rectangle corner is out of range"),
        }
    })
    .named("rectangle")
}

pub fn shape() -> Decoder<Value, Shape> {
    from_key("type", string())
        .and_then(|kind| match kind.as_str() {
            "circle" => circle(),
            "rectangle" => rectangle(),
            _ => fail("type must be either 'circle' or 'rectangle'"),
        })
        .named("shape")
}
