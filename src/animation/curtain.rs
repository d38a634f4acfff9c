use std::fmt::Write as _;

use crate::foundation::core::{BezPath, Point};

/// Build the menu overlay's trailing edge for a viewport `width` px wide.
///
/// The edge runs along the top of the overlay and sags into a quadratic curve whose control
/// point sits `depth` px below the middle of the viewport. `depth == 0` is the flat resting
/// edge.
pub fn overlay_curve_path(width: f64, depth: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(Point::ORIGIN);
    path.line_to(Point::new(width, 0.0));
    path.quad_to(Point::new(width / 2.0, depth), Point::ORIGIN);
    path.close_path();
    path
}

/// SVG path data of [`overlay_curve_path`], two decimals per coordinate.
pub fn overlay_curve_svg(width: f64, depth: f64) -> String {
    let mut d = String::with_capacity(48);
    let _ = write!(
        d,
        "M0,0 L{width:.2},0 Q{:.2},{depth:.2} 0,0 Z",
        width / 2.0
    );
    d
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curtain.rs"]
mod tests;
