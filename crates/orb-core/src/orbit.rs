//! Damped orbit state around the origin.
//!
//! Pointer drags and the idle auto-rotation both accumulate into pending
//! deltas; `update` bleeds a damping-sized fraction of the pending rotation
//! into the camera angles each frame, which gives drags their momentum tail.
//! All rates are normalized to a 60 Hz reference frame so the feel does not
//! change with the display refresh rate.

use crate::constants::{
    AUTO_ROTATE_STEP_RADIANS, CAMERA_DISTANCE, CAMERA_FOVY_RADIANS, CAMERA_ZFAR, CAMERA_ZNEAR,
    ORBIT_DAMPING, ORBIT_MAX_STEP_FRAMES, ORBIT_REFERENCE_FPS, ORBIT_ROTATE_SPEED,
    PITCH_LIMIT_RADIANS,
};
use crate::state::Camera;
use glam::Vec3;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct OrbitState {
    yaw: f32,
    pitch: f32,
    distance: f32,
    delta_yaw: f32,
    delta_pitch: f32,
    dragging: bool,
    auto_rotate: bool,
    last_drag_px: Option<(f32, f32)>,
}

impl OrbitState {
    pub fn new(distance: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance,
            delta_yaw: 0.0,
            delta_pitch: 0.0,
            dragging: false,
            auto_rotate: true,
            last_drag_px: None,
        }
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_auto_rotate(&mut self, on: bool) {
        self.auto_rotate = on;
    }

    /// Begin a pointer drag at the given pixel position.
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.last_drag_px = Some((x, y));
    }

    /// Feed a pointer move while dragging. `viewport_height` scales the
    /// gesture: dragging one full viewport height sweeps one revolution.
    pub fn drag_to(&mut self, x: f32, y: f32, viewport_height: f32) {
        if !self.dragging {
            return;
        }
        let Some((last_x, last_y)) = self.last_drag_px else {
            self.last_drag_px = Some((x, y));
            return;
        };
        let h = viewport_height.max(1.0);
        self.delta_yaw -= TAU * (x - last_x) / h * ORBIT_ROTATE_SPEED;
        self.delta_pitch += TAU * (y - last_y) / h * ORBIT_ROTATE_SPEED;
        self.last_drag_px = Some((x, y));
    }

    /// End the drag; accumulated momentum keeps decaying through `update`.
    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.last_drag_px = None;
    }

    /// Advance the orbit by `dt_sec` seconds of wall time.
    pub fn update(&mut self, dt_sec: f32) {
        let frames = (dt_sec * ORBIT_REFERENCE_FPS).clamp(0.0, ORBIT_MAX_STEP_FRAMES);
        if self.auto_rotate && !self.dragging {
            self.delta_yaw -= AUTO_ROTATE_STEP_RADIANS * frames;
        }
        let decay = (1.0 - ORBIT_DAMPING).powf(frames);
        self.yaw += self.delta_yaw * (1.0 - decay);
        self.pitch = (self.pitch + self.delta_pitch * (1.0 - decay))
            .clamp(-PITCH_LIMIT_RADIANS, PITCH_LIMIT_RADIANS);
        self.delta_yaw *= decay;
        self.delta_pitch *= decay;
    }

    /// Camera eye position for the current angles. Starts on +Z and orbits
    /// the origin at a fixed distance (zoom is not a gesture here).
    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(
            self.distance * cos_pitch * sin_yaw,
            self.distance * sin_pitch,
            self.distance * cos_pitch * cos_yaw,
        )
    }

    /// Full camera for the current orbit angles and a surface aspect ratio.
    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Default for OrbitState {
    fn default() -> Self {
        Self::new(CAMERA_DISTANCE)
    }
}
