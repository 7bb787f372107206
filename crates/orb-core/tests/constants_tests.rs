// Sanity checks on tuning constants that the rendering and interaction
// code silently relies on.

use orb_core::constants::*;
use std::f32::consts::PI;

#[test]
fn shells_nest_inside_the_camera_orbit() {
    assert!(WIREFRAME_RADIUS < POINT_SPHERE_RADIUS);
    assert!(LABEL_RADIAL_FACTOR > 1.0, "labels must float outside their markers");
    assert!(CAMERA_DISTANCE > POINT_SPHERE_RADIUS * LABEL_RADIAL_FACTOR);
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_DISTANCE + POINT_SPHERE_RADIUS);
}

#[test]
fn hover_feedback_always_enlarges() {
    assert!(MARKER_HOVER_SCALE > 1.0);
    assert!(LABEL_HOVER_SIZE[0] > LABEL_SIZE[0]);
    assert!(LABEL_HOVER_SIZE[1] > LABEL_SIZE[1]);
}

#[test]
fn picking_uses_the_idle_marker_size() {
    assert_eq!(PICK_SPHERE_RADIUS, MARKER_RADIUS);
}

#[test]
fn orbit_tuning_is_stable() {
    assert!(ORBIT_DAMPING > 0.0 && ORBIT_DAMPING < 1.0);
    assert!(ORBIT_REFERENCE_FPS > 0.0);
    assert!(ORBIT_MAX_STEP_FRAMES >= 1.0);
    assert!(AUTO_ROTATE_STEP_RADIANS > 0.0);
    assert!(PITCH_LIMIT_RADIANS < PI / 2.0);
}

#[test]
fn camera_fov_is_a_sane_perspective_angle() {
    assert!(CAMERA_FOVY_RADIANS > 0.0 && CAMERA_FOVY_RADIANS < PI);
}

#[test]
fn atlas_tiles_are_wide_landscape_rectangles() {
    // Label quads are 2:1, tiles match so glyphs are not squashed.
    assert_eq!(ATLAS_TILE_WIDTH, ATLAS_TILE_HEIGHT * 2);
    assert!(LABEL_SIZE[0] / LABEL_SIZE[1] == 2.0);
}

#[test]
fn default_skill_list_is_usable() {
    assert!(!DEFAULT_SKILLS.is_empty());
    for s in DEFAULT_SKILLS {
        assert!(!s.is_empty());
    }
}
