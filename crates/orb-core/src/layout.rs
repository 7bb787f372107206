//! Even point distribution over a sphere.
//!
//! Markers are placed on a golden-spiral walk from the south pole to the
//! north pole: the polar angle steps linearly in `cos(phi)` so every point
//! owns an equal band of surface area, and the azimuth advances by
//! `sqrt(n * pi)` per step so neighbouring points never stack on a meridian.

use crate::constants::LABEL_RADIAL_FACTOR;
use glam::Vec3;
use std::f32::consts::PI;

/// Positions for `n` points at `radius` from the origin.
///
/// Deterministic in `n`: the same count always yields the same layout.
/// `n == 1` yields the north pole, `n == 2` the south then north pole.
pub fn sphere_points(n: usize, radius: f32) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        // cos(phi) walks -1..1 endpoint-inclusive so poles are always used
        let t = if n > 1 {
            -1.0 + 2.0 * i as f32 / (n as f32 - 1.0)
        } else {
            1.0
        };
        let phi = t.clamp(-1.0, 1.0).acos();
        let theta = (n as f32 * PI).sqrt() * phi;
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();
        points.push(radius * Vec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi));
    }
    points
}

/// World position of the label belonging to a marker.
#[inline]
pub fn label_anchor(marker: Vec3) -> Vec3 {
    marker * LABEL_RADIAL_FACTOR
}
