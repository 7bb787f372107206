//! Camera description shared by the web and native front-ends.
//!
//! Kept free of platform APIs so it can be exercised in host-side tests. The
//! front-ends feed the matrices to the GPU and use `ray_from_ndc` for
//! pointer picking against the same projection the frame was drawn with.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Right-handed perspective camera.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// World-space ray through a point given in normalized device coordinates
    /// (x right, y up, both -1..1). Returns `(origin, direction)` with the
    /// direction normalized.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far: Vec3 = far.truncate() / far.w;
        let dir = (far - self.eye).normalize();
        (self.eye, dir)
    }
}
