//! Pointer ray casting against marker spheres.

use glam::{Vec2, Vec3};

/// Analytic ray/sphere intersection. Returns the nearest non-negative hit
/// distance along the (normalized) ray direction, or `None` on a miss.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Map a CSS-pixel position within a surface of `width` x `height` to
/// normalized device coordinates (x right, y up). `None` when the surface
/// has no extent yet.
#[inline]
pub fn ndc_from_css(x: f32, y: f32, width: f32, height: f32) -> Option<Vec2> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (2.0 * x / width) - 1.0,
        1.0 - (2.0 * y / height),
    ))
}

/// Index and distance of the closest sphere hit by the ray.
///
/// Ties on distance keep the earlier index, so repeated casts of the same
/// ray always pick the same sphere.
pub fn nearest_hit(
    ray_origin: Vec3,
    ray_dir: Vec3,
    centers: &[Vec3],
    radius: f32,
) -> Option<(usize, f32)> {
    let mut best = None::<(usize, f32)>;
    for (i, center) in centers.iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, *center, radius) {
            match best {
                Some((_, best_t)) if t >= best_t => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best
}
