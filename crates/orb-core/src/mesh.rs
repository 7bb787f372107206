//! CPU-side geometry for the wire shell and the marker spheres.
//!
//! Vertices are plain `[f32; 3]` arrays so the front-ends can upload them
//! with a single cast. The polar axis is +Z to match the point layout.

use std::f32::consts::{PI, TAU};

/// Line-list vertices for a latitude/longitude wire sphere.
///
/// Each segment contributes two vertices; the caller draws the whole buffer
/// with `LineList`. Poles are skipped for parallels (zero-length rings).
pub fn wireframe_sphere(radius: f32, parallels: u32, meridians: u32, arc_steps: u32) -> Vec<[f32; 3]> {
    let mut lines = Vec::with_capacity(((parallels + meridians) * arc_steps * 2) as usize);

    // Rings of constant polar angle
    for j in 1..=parallels {
        let phi = PI * j as f32 / (parallels + 1) as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for s in 0..arc_steps {
            let t0 = TAU * s as f32 / arc_steps as f32;
            let t1 = TAU * (s + 1) as f32 / arc_steps as f32;
            lines.push(ring_point(radius, sin_phi, cos_phi, t0));
            lines.push(ring_point(radius, sin_phi, cos_phi, t1));
        }
    }

    // Pole-to-pole arcs of constant azimuth
    for k in 0..meridians {
        let theta = TAU * k as f32 / meridians as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        for s in 0..arc_steps {
            let p0 = PI * s as f32 / arc_steps as f32;
            let p1 = PI * (s + 1) as f32 / arc_steps as f32;
            lines.push(arc_point(radius, sin_theta, cos_theta, p0));
            lines.push(arc_point(radius, sin_theta, cos_theta, p1));
        }
    }

    lines
}

#[inline]
fn ring_point(radius: f32, sin_phi: f32, cos_phi: f32, theta: f32) -> [f32; 3] {
    let (sin_theta, cos_theta) = theta.sin_cos();
    [
        radius * sin_phi * cos_theta,
        radius * sin_phi * sin_theta,
        radius * cos_phi,
    ]
}

#[inline]
fn arc_point(radius: f32, sin_theta: f32, cos_theta: f32, phi: f32) -> [f32; 3] {
    let (sin_phi, cos_phi) = phi.sin_cos();
    [
        radius * sin_phi * cos_theta,
        radius * sin_phi * sin_theta,
        radius * cos_phi,
    ]
}

/// Indexed triangle mesh of a unit UV sphere.
///
/// Returned as `(vertices, indices)`; instances scale it per marker, so the
/// radius is always 1. Degenerate pole quads are emitted as single triangles.
pub fn unit_sphere_mesh(sectors: u32, stacks: u32) -> (Vec<[f32; 3]>, Vec<u32>) {
    let mut vertices = Vec::with_capacity(((stacks + 1) * (sectors + 1)) as usize);
    for st in 0..=stacks {
        let phi = PI * st as f32 / stacks as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for se in 0..=sectors {
            let theta = TAU * se as f32 / sectors as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            vertices.push([sin_phi * cos_theta, sin_phi * sin_theta, cos_phi]);
        }
    }

    let mut indices = Vec::with_capacity((stacks * sectors * 6) as usize);
    for st in 0..stacks {
        for se in 0..sectors {
            let a = st * (sectors + 1) + se;
            let b = a + sectors + 1;
            if st != 0 {
                indices.extend_from_slice(&[a, b, a + 1]);
            }
            if st != stacks - 1 {
                indices.extend_from_slice(&[a + 1, b, b + 1]);
            }
        }
    }

    (vertices, indices)
}
