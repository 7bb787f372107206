// Tests for the spiral point layout and label anchors.

use glam::Vec3;
use orb_core::constants::LABEL_RADIAL_FACTOR;
use orb_core::layout::{label_anchor, sphere_points};

#[test]
fn every_point_sits_on_the_sphere() {
    let radius = 80.0;
    for n in [1usize, 2, 3, 7, 12, 50] {
        let points = sphere_points(n, radius);
        assert_eq!(points.len(), n);
        for (i, p) in points.iter().enumerate() {
            assert!(
                (p.length() - radius).abs() < 1e-3,
                "n={} point {} has length {}",
                n,
                i,
                p.length()
            );
        }
    }
}

#[test]
fn two_points_land_on_the_poles() {
    let points = sphere_points(2, 70.0);
    // First point is the south pole, second the north pole
    assert!(points[0].distance(Vec3::new(0.0, 0.0, -70.0)) < 1e-3);
    assert!(points[1].distance(Vec3::new(0.0, 0.0, 70.0)) < 1e-3);
}

#[test]
fn single_point_lands_on_the_north_pole() {
    let points = sphere_points(1, 80.0);
    assert_eq!(points.len(), 1);
    assert!(points[0].distance(Vec3::new(0.0, 0.0, 80.0)) < 1e-3);
}

#[test]
fn zero_points_yield_an_empty_layout() {
    assert!(sphere_points(0, 80.0).is_empty());
}

#[test]
fn layout_is_deterministic_in_count() {
    let a = sphere_points(12, 80.0);
    let b = sphere_points(12, 80.0);
    for (pa, pb) in a.iter().zip(&b) {
        assert_eq!(pa, pb);
    }
}

#[test]
fn points_are_pairwise_distinct() {
    let points = sphere_points(12, 80.0);
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            assert!(
                points[i].distance(points[j]) > 1.0,
                "points {} and {} nearly coincide",
                i,
                j
            );
        }
    }
}

#[test]
fn label_anchor_scales_along_the_marker_ray() {
    let marker = Vec3::new(0.0, 0.0, 80.0);
    let anchor = label_anchor(marker);
    assert!(anchor.distance(marker * LABEL_RADIAL_FACTOR) < 1e-6);
    // Anchor stays on the same ray from the origin
    let points = sphere_points(12, 80.0);
    for p in &points {
        let a = label_anchor(*p);
        assert!((a.length() - p.length() * LABEL_RADIAL_FACTOR).abs() < 1e-3);
        assert!(a.normalize().distance(p.normalize()) < 1e-5);
    }
}
