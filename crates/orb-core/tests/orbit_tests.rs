// Tests for the damped orbit model: auto-rotate, drag momentum and clamping.

use glam::Vec3;
use orb_core::constants::{CAMERA_DISTANCE, PITCH_LIMIT_RADIANS};
use orb_core::orbit::OrbitState;
use std::f32::consts::TAU;

const FRAME: f32 = 1.0 / 60.0;

#[test]
fn fresh_state_looks_down_negative_z() {
    let orbit = OrbitState::new(CAMERA_DISTANCE);
    let eye = orbit.eye();
    assert!(eye.distance(Vec3::new(0.0, 0.0, CAMERA_DISTANCE)) < 1e-4);
    assert_eq!(orbit.yaw(), 0.0);
    assert_eq!(orbit.pitch(), 0.0);
}

#[test]
fn auto_rotate_advances_yaw_over_time() {
    let mut orbit = OrbitState::new(CAMERA_DISTANCE);
    let mut last = orbit.yaw().abs();
    for _ in 0..5 {
        for _ in 0..30 {
            orbit.update(FRAME);
        }
        let now = orbit.yaw().abs();
        assert!(now > last, "yaw should keep moving while idle");
        last = now;
    }
    // Pitch is untouched by auto-rotation
    assert_eq!(orbit.pitch(), 0.0);
}

#[test]
fn dragging_pauses_auto_rotate() {
    let mut orbit = OrbitState::new(CAMERA_DISTANCE);
    orbit.begin_drag(100.0, 100.0);
    for _ in 0..120 {
        orbit.update(FRAME);
    }
    assert!(orbit.yaw().abs() < 1e-6, "held pointer must freeze the orbit");
    orbit.end_drag();
    for _ in 0..120 {
        orbit.update(FRAME);
    }
    assert!(orbit.yaw().abs() > 1e-4, "idle spin resumes after release");
}

#[test]
fn drag_momentum_converges_to_the_full_gesture() {
    let mut orbit = OrbitState::new(CAMERA_DISTANCE);
    orbit.set_auto_rotate(false);
    orbit.begin_drag(0.0, 0.0);
    orbit.drag_to(100.0, 0.0, 1000.0);
    orbit.end_drag();
    // 100 px over a 1000 px viewport is a tenth of a revolution
    let expected = -TAU * 100.0 / 1000.0;
    for _ in 0..600 {
        orbit.update(FRAME);
    }
    assert!(
        (orbit.yaw() - expected).abs() < 1e-3,
        "yaw {} should settle near {}",
        orbit.yaw(),
        expected
    );
}

#[test]
fn momentum_decays_rather_than_stopping_dead() {
    let mut orbit = OrbitState::new(CAMERA_DISTANCE);
    orbit.set_auto_rotate(false);
    orbit.begin_drag(0.0, 0.0);
    orbit.drag_to(200.0, 0.0, 1000.0);
    orbit.end_drag();
    orbit.update(FRAME);
    let after_release = orbit.yaw();
    assert!(after_release.abs() > 0.0);
    orbit.update(FRAME);
    let next = orbit.yaw();
    // Still coasting in the same direction, by a smaller step
    assert!(next.abs() > after_release.abs());
    assert!((next - after_release).abs() < after_release.abs());
}

#[test]
fn update_is_frame_rate_independent() {
    let mut coarse = OrbitState::new(CAMERA_DISTANCE);
    coarse.set_auto_rotate(false);
    coarse.begin_drag(0.0, 0.0);
    coarse.drag_to(150.0, 40.0, 900.0);
    coarse.end_drag();
    let mut fine = coarse.clone();

    coarse.update(2.0 * FRAME);
    fine.update(FRAME);
    fine.update(FRAME);

    assert!((coarse.yaw() - fine.yaw()).abs() < 1e-5);
    assert!((coarse.pitch() - fine.pitch()).abs() < 1e-5);
}

#[test]
fn pitch_is_clamped_away_from_the_poles() {
    let mut orbit = OrbitState::new(CAMERA_DISTANCE);
    orbit.set_auto_rotate(false);
    orbit.begin_drag(0.0, 0.0);
    orbit.drag_to(0.0, 50_000.0, 100.0);
    orbit.end_drag();
    for _ in 0..600 {
        orbit.update(FRAME);
    }
    assert!(orbit.pitch() <= PITCH_LIMIT_RADIANS + 1e-6);
    assert!(orbit.pitch() >= -PITCH_LIMIT_RADIANS - 1e-6);
    // The eye never leaves the orbit sphere
    assert!((orbit.eye().length() - CAMERA_DISTANCE).abs() < 1e-2);
}

#[test]
fn drag_requires_begin_before_move() {
    let mut orbit = OrbitState::new(CAMERA_DISTANCE);
    orbit.set_auto_rotate(false);
    orbit.drag_to(500.0, 500.0, 1000.0);
    for _ in 0..60 {
        orbit.update(FRAME);
    }
    assert_eq!(orbit.yaw(), 0.0);
    assert_eq!(orbit.pitch(), 0.0);
}

#[test]
fn camera_tracks_aspect_but_not_the_scene() {
    let orbit = OrbitState::new(CAMERA_DISTANCE);
    let wide = orbit.camera(2.0);
    let tall = orbit.camera(0.5);
    assert_eq!(wide.aspect, 2.0);
    assert_eq!(tall.aspect, 0.5);
    // Same orbit, same eye; resizing the surface never moves the camera
    assert_eq!(wide.eye, tall.eye);
    assert_eq!(wide.fovy_radians, tall.fovy_radians);
}

#[test]
fn eye_distance_stays_fixed_while_orbiting() {
    let mut orbit = OrbitState::new(CAMERA_DISTANCE);
    orbit.begin_drag(0.0, 0.0);
    orbit.drag_to(321.0, 87.0, 800.0);
    orbit.end_drag();
    for _ in 0..200 {
        orbit.update(FRAME);
        assert!((orbit.eye().length() - CAMERA_DISTANCE).abs() < 1e-2);
    }
}
