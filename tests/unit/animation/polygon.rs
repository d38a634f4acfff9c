use super::*;
use crate::animation::noise::SimplexNoise2D;

fn spec(point_count: u32, angle_offset: f64) -> PolygonPathSpec {
    PolygonPathSpec {
        center: Point::new(32.0, 32.0),
        base_radius: 20.0,
        noise_strength: 3.0,
        angle_offset,
        point_count,
    }
}

#[test]
fn emits_point_count_plus_one_vertices() {
    let noise = SimplexNoise2D::new(11);
    for n in [1, 3, 12, 360] {
        let pts = generate_polygon(&spec(n, 0.4), &noise).unwrap();
        assert_eq!(pts.len(), n as usize + 1);
    }
}

#[test]
fn zero_points_is_rejected() {
    let noise = SimplexNoise2D::new(11);
    assert!(generate_polygon(&spec(0, 0.0), &noise).is_err());
}

#[test]
fn flat_noise_gives_a_circle() {
    let flat = |_x: f64, _y: f64| 0.0;
    let pts = generate_polygon(&spec(8, 1.0), &flat).unwrap();
    for p in &pts {
        let r = (*p - Point::new(32.0, 32.0)).hypot();
        assert!((r - 20.0).abs() < 1e-9);
    }
    assert!((pts[0].x - 52.0).abs() < 1e-9);
    assert!((pts[0].y - 32.0).abs() < 1e-9);
}

#[test]
fn same_inputs_same_outline() {
    let noise = SimplexNoise2D::new(5);
    let a = generate_polygon(&spec(90, 2.5), &noise).unwrap();
    let b = generate_polygon(&spec(90, 2.5), &noise).unwrap();
    assert_eq!(a, b);
}

#[test]
fn endpoint_closure_follows_the_noise_sample() {
    // With zero offset both endpoint samples hit the same coordinate (cos 0, sin 0) up to the
    // rounding of sin(2π), so the outline closes.
    let noise = SimplexNoise2D::new(5);
    let pts = generate_polygon(&spec(64, 0.0), &noise).unwrap();
    let (first, last) = (pts[0], pts[pts.len() - 1]);
    assert!((first - last).hypot() < 1e-9);

    // A field that depends on the raw sine coordinate's sign sees sin(2π) != sin(0) exactly,
    // which is the asymmetry the generator must not paper over.
    let split_field = |_x: f64, y: f64| if y == 0.0 { 0.0 } else { 1.0 };
    let pts = generate_polygon(&spec(4, 0.0), &split_field).unwrap();
    let (first, last) = (pts[0], pts[pts.len() - 1]);
    assert_eq!(first, Point::new(52.0, 32.0));
    assert!((last.x - 55.0).abs() < 1e-9);
}

#[test]
fn svg_path_format() {
    let pts = [Point::new(1.0, 2.0), Point::new(3.456, -0.5)];
    assert_eq!(polygon_to_svg_path(&pts), "M1.00,2.00 L3.46,-0.50 Z");
    assert_eq!(polygon_to_svg_path(&[]), "Z");
}

#[test]
fn bez_path_is_closed() {
    let noise = SimplexNoise2D::new(2);
    let pts = generate_polygon(&spec(6, 0.1), &noise).unwrap();
    let path = polygon_to_bez_path(&pts);
    let els = path.elements();
    assert_eq!(els.len(), pts.len() + 1);
    assert!(matches!(els.last(), Some(kurbo::PathEl::ClosePath)));
    assert!(polygon_to_bez_path(&[]).elements().is_empty());
}
