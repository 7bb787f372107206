// Tests for the scene container: hover bookkeeping and end-to-end picking.

use glam::{Vec2, Vec3};
use orb_core::constants::{
    DEFAULT_SKILLS, LABEL_HOVER_SIZE, LABEL_SIZE, MARKER_HOVER_SCALE, POINT_SPHERE_RADIUS,
};
use orb_core::orbit::OrbitState;
use orb_core::scene::SkillSphere;

fn default_labels() -> Vec<String> {
    DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()
}

#[test]
fn scene_builds_one_marker_per_label() {
    let scene = SkillSphere::new(default_labels(), POINT_SPHERE_RADIUS);
    assert_eq!(scene.len(), 12);
    assert_eq!(scene.marker_positions().len(), 12);
    assert_eq!(scene.label_anchors().len(), 12);
    for p in scene.marker_positions() {
        assert!((p.length() - POINT_SPHERE_RADIUS).abs() < 1e-3);
    }
}

#[test]
fn at_most_one_marker_is_highlighted() {
    let mut scene = SkillSphere::new(default_labels(), POINT_SPHERE_RADIUS);
    assert!(scene.set_hovered(Some(2)));
    assert!(scene.set_hovered(Some(5)));
    for i in 0..scene.len() {
        let expected = if i == 5 { MARKER_HOVER_SCALE } else { 1.0 };
        assert_eq!(scene.marker_scale(i), expected, "marker {}", i);
    }
    assert!(scene.set_hovered(None));
    for i in 0..scene.len() {
        assert_eq!(scene.marker_scale(i), 1.0);
    }
}

#[test]
fn set_hovered_reports_changes_only() {
    let mut scene = SkillSphere::new(default_labels(), POINT_SPHERE_RADIUS);
    assert!(!scene.set_hovered(None), "no-op clear is not a change");
    assert!(scene.set_hovered(Some(3)));
    assert!(!scene.set_hovered(Some(3)), "same index is not a change");
    assert!(scene.set_hovered(None));
}

#[test]
fn hovered_label_follows_the_hover_index() {
    let mut scene = SkillSphere::new(default_labels(), POINT_SPHERE_RADIUS);
    assert_eq!(scene.hovered_label(), None);
    scene.set_hovered(Some(0));
    assert_eq!(scene.hovered_label(), Some("React"));
    scene.set_hovered(Some(11));
    assert_eq!(scene.hovered_label(), Some("Leadership"));
}

#[test]
fn label_size_grows_only_for_the_hovered_entry() {
    let mut scene = SkillSphere::new(default_labels(), POINT_SPHERE_RADIUS);
    scene.set_hovered(Some(4));
    assert_eq!(
        scene.label_size(4),
        Vec2::new(LABEL_HOVER_SIZE[0], LABEL_HOVER_SIZE[1])
    );
    assert_eq!(scene.label_size(3), Vec2::new(LABEL_SIZE[0], LABEL_SIZE[1]));
}

#[test]
fn center_ray_picks_the_front_pole_of_a_two_label_scene() {
    // Two labels land on the poles; the default camera on +Z sees the
    // north pole marker first.
    let scene = SkillSphere::new(vec!["Far".into(), "Near".into()], 70.0);
    let camera = OrbitState::default().camera(16.0 / 9.0);
    let (ro, rd) = camera.ray_from_ndc(Vec2::ZERO);
    assert_eq!(scene.pick(ro, rd), Some(1));
}

#[test]
fn picking_is_idempotent_under_hover_growth() {
    // A hovered (enlarged) marker hit-tests at its idle radius, so a
    // resting pointer keeps picking the same index.
    let mut scene = SkillSphere::new(default_labels(), POINT_SPHERE_RADIUS);
    let camera = OrbitState::default().camera(1.25);

    // Aim straight at a known marker center
    let target = scene.marker_positions()[7];
    let ro = camera.eye;
    let rd = (target - ro).normalize();

    let first = scene.pick(ro, rd);
    assert!(first.is_some());
    scene.set_hovered(first);
    let second = scene.pick(ro, rd);
    assert_eq!(first, second);
}

#[test]
fn pick_driven_hover_reports_its_clear_exactly_once() {
    // Teardown clears the hover with set_hovered(None) and relies on the
    // return value to tell the host that no label is hovered any more. A
    // hover that arrived through the pick path must report that clear, and
    // only once.
    let mut scene = SkillSphere::new(default_labels(), POINT_SPHERE_RADIUS);
    let camera = OrbitState::default().camera(1.25);
    let target = scene.marker_positions()[7];
    let ro = camera.eye;
    let rd = (target - ro).normalize();

    let hit = scene.pick(ro, rd);
    assert!(scene.set_hovered(hit), "picked hover is a change");
    assert!(scene.set_hovered(None), "the clear must be reported");
    assert!(!scene.set_hovered(None), "a second clear is a no-op");
}

#[test]
fn ray_away_from_all_markers_picks_nothing() {
    let scene = SkillSphere::new(default_labels(), POINT_SPHERE_RADIUS);
    let hit = scene.pick(Vec3::new(0.0, 0.0, 200.0), Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(hit, None);
}

#[test]
fn empty_scene_is_inert() {
    let mut scene = SkillSphere::new(Vec::new(), POINT_SPHERE_RADIUS);
    assert!(scene.is_empty());
    assert_eq!(
        scene.pick(Vec3::new(0.0, 0.0, 200.0), Vec3::new(0.0, 0.0, -1.0)),
        None
    );
    assert!(!scene.set_hovered(None));
    assert_eq!(scene.hovered_label(), None);
}
