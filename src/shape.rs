//! The shape vocabulary: a closed sum type with one dispatch function per
//! operation.
//!
//! Every variant carries the inputs it was built from plus the measurements
//! its constructor computed, so queries never recompute. Dimensions are not
//! validated; a negative radius still yields the formula-exact area and
//! perimeter.

use std::f64::consts::PI;

use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle {
        name: String,
        radius: f64,
        area: f64,
        perimeter: f64,
    },
    Rectangle {
        name: String,
        side1: f64,
        side2: f64,
        area: f64,
        perimeter: f64,
    },
    Square {
        name: String,
        side: f64,
        area: f64,
        perimeter: f64,
    },
    Trapezoid {
        name: String,
        long_side: f64,
        short_side: f64,
        height: f64,
        angled_side_length: f64,
        area: f64,
        perimeter: f64,
    },
}

pub fn circle(name: impl Into<String>, radius: f64) -> Shape {
    let name = name.into();
    let area = radius * radius * PI;
    let perimeter = 2.0 * radius * PI;
    debug!(%name, radius, area, perimeter, "built circle");
    Shape::Circle {
        name,
        radius,
        area,
        perimeter,
    }
}

pub fn rectangle(name: impl Into<String>, side1: f64, side2: f64) -> Shape {
    let name = name.into();
    let area = side1 * side2;
    let perimeter = 2.0 * (side1 + side2);
    debug!(%name, side1, side2, area, perimeter, "built rectangle");
    Shape::Rectangle {
        name,
        side1,
        side2,
        area,
        perimeter,
    }
}

/// A rectangle with both sides equal. It keeps its own variant because its
/// area query carries an extra diagnostic, see [`diagnostic`].
pub fn square(name: impl Into<String>, side: f64) -> Shape {
    let name = name.into();
    let area = side * side;
    let perimeter = 2.0 * (side + side);
    debug!(%name, side, area, perimeter, "built square");
    Shape::Square {
        name,
        side,
        area,
        perimeter,
    }
}

/// The angled side length follows from the Pythagorean theorem on half the
/// difference of the parallel sides and the height. It is stored inline and
/// released together with the shape.
pub fn trapezoid(name: impl Into<String>, long_side: f64, short_side: f64, height: f64) -> Shape {
    let name = name.into();
    let half_overhang = (long_side - short_side) / 2.0;
    let angled_side_length = (half_overhang * half_overhang + height * height).sqrt();
    let area = height * (long_side + short_side) / 2.0;
    let perimeter = short_side + long_side + 2.0 * angled_side_length;
    debug!(%name, long_side, short_side, height, area, perimeter, "built trapezoid");
    Shape::Trapezoid {
        name,
        long_side,
        short_side,
        height,
        angled_side_length,
        area,
        perimeter,
    }
}

/// The label supplied at construction.
pub fn name(shape: &Shape) -> &str {
    match shape {
        Shape::Circle { name, .. }
        | Shape::Rectangle { name, .. }
        | Shape::Square { name, .. }
        | Shape::Trapezoid { name, .. } => name,
    }
}

/// Callers may rename a shape in place; nothing else about it can change.
pub fn name_mut(shape: &mut Shape) -> &mut String {
    match shape {
        Shape::Circle { name, .. }
        | Shape::Rectangle { name, .. }
        | Shape::Square { name, .. }
        | Shape::Trapezoid { name, .. } => name,
    }
}

pub fn area(shape: &Shape) -> f64 {
    match shape {
        Shape::Circle { area, .. }
        | Shape::Rectangle { area, .. }
        | Shape::Square { area, .. }
        | Shape::Trapezoid { area, .. } => *area,
    }
}

pub fn perimeter(shape: &Shape) -> f64 {
    match shape {
        Shape::Circle { perimeter, .. }
        | Shape::Rectangle { perimeter, .. }
        | Shape::Square { perimeter, .. }
        | Shape::Trapezoid { perimeter, .. } => *perimeter,
    }
}

/// Fixed side count for the polygon variants; a circle has none.
pub fn side_count(shape: &Shape) -> Option<u32> {
    match shape {
        Shape::Circle { .. } => None,
        Shape::Rectangle { .. } | Shape::Square { .. } | Shape::Trapezoid { .. } => Some(4),
    }
}

/// The square announces every area query with "The square of <side>!".
/// The query itself stays pure; callers that want the announcement emit
/// this line alongside [`area`].
pub fn diagnostic(shape: &Shape) -> Option<String> {
    match shape {
        Shape::Square { side, .. } => Some(format!("The square of {}!", side)),
        _ => None,
    }
}
