use std::{f64::consts::TAU, fmt::Write as _};

use crate::{
    animation::noise::Noise2D,
    foundation::core::{BezPath, Point},
    foundation::error::{FolioError, FolioResult},
};

/// Inputs that fully determine one noise-perturbed ring outline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PolygonPathSpec {
    /// Ring center.
    pub center: Point,
    /// Unperturbed radius.
    pub base_radius: f64,
    /// Scale applied to the noise sample before it is added to the radius.
    pub noise_strength: f64,
    /// Phase offset that walks the noise sample around the field over time.
    pub angle_offset: f64,
    /// Number of segments; `point_count + 1` vertices are emitted.
    pub point_count: u32,
}

/// Generate the ring outline for `spec`, sampling `noise` once per vertex.
///
/// Vertex `i` sits at `angle = 2π i / point_count`. The noise coordinate applies the offset
/// at two different rates (`offset * 0.3` on the cosine axis, `offset` on the sine axis), so
/// the final vertex repeats the first vertex's angle but not necessarily its noise sample.
/// That near-closure is kept as is.
pub fn generate_polygon<N>(spec: &PolygonPathSpec, noise: &N) -> FolioResult<Vec<Point>>
where
    N: Noise2D + ?Sized,
{
    if spec.point_count == 0 {
        return Err(FolioError::validation("polygon point_count must be > 0"));
    }

    let n = spec.point_count;
    let offset = spec.angle_offset;
    let mut points = Vec::with_capacity(n as usize + 1);
    for i in 0..=n {
        let angle = TAU * f64::from(i) / f64::from(n);
        let sample = noise.sample((angle + offset * 0.3).cos(), (angle + offset).sin());
        let r = spec.base_radius + sample * spec.noise_strength;
        points.push(Point::new(
            spec.center.x + r * angle.cos(),
            spec.center.y + r * angle.sin(),
        ));
    }
    Ok(points)
}

/// Render points as SVG path data: `M x,y L x,y ... Z` with two decimals per coordinate.
pub fn polygon_to_svg_path(points: &[Point]) -> String {
    let mut d = String::with_capacity(points.len() * 16 + 1);
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{cmd}{:.2},{:.2} ", p.x, p.y);
    }
    d.push('Z');
    d
}

/// Build a closed `BezPath` through `points`.
pub fn polygon_to_bez_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
        path.close_path();
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/animation/polygon.rs"]
mod tests;
