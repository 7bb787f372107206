// Tests for the generated wire shell and marker mesh.

use orb_core::constants::{
    MARKER_SECTORS, MARKER_STACKS, WIREFRAME_RADIUS, WIRE_ARC_STEPS, WIRE_MERIDIANS,
    WIRE_PARALLELS,
};
use orb_core::mesh::{unit_sphere_mesh, wireframe_sphere};

fn length(v: [f32; 3]) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

#[test]
fn wire_vertices_all_sit_on_the_shell() {
    let verts = wireframe_sphere(WIREFRAME_RADIUS, WIRE_PARALLELS, WIRE_MERIDIANS, WIRE_ARC_STEPS);
    assert!(!verts.is_empty());
    for v in &verts {
        assert!(
            (length(*v) - WIREFRAME_RADIUS).abs() < 1e-2,
            "vertex {:?} off the shell",
            v
        );
    }
}

#[test]
fn wire_vertex_count_matches_the_tessellation() {
    // (parallels + meridians) polylines, arc_steps segments each, two
    // vertices per segment.
    let verts = wireframe_sphere(WIREFRAME_RADIUS, WIRE_PARALLELS, WIRE_MERIDIANS, WIRE_ARC_STEPS);
    let expected = ((WIRE_PARALLELS + WIRE_MERIDIANS) * WIRE_ARC_STEPS * 2) as usize;
    assert_eq!(verts.len(), expected);
    assert_eq!(verts.len() % 2, 0, "line list needs an even vertex count");
}

#[test]
fn wire_segments_are_short_relative_to_the_shell() {
    // 64 steps per ring keeps every chord well under the radius, which is
    // what makes the line hull read as a sphere.
    let verts = wireframe_sphere(WIREFRAME_RADIUS, WIRE_PARALLELS, WIRE_MERIDIANS, WIRE_ARC_STEPS);
    for pair in verts.chunks_exact(2) {
        let d = [
            pair[0][0] - pair[1][0],
            pair[0][1] - pair[1][1],
            pair[0][2] - pair[1][2],
        ];
        assert!(length(d) < WIREFRAME_RADIUS * 0.2);
    }
}

#[test]
fn unit_sphere_mesh_has_unit_vertices() {
    let (verts, _) = unit_sphere_mesh(MARKER_SECTORS, MARKER_STACKS);
    for v in &verts {
        assert!((length(*v) - 1.0).abs() < 1e-3);
    }
}

#[test]
fn unit_sphere_mesh_counts_and_indices_are_consistent() {
    let (verts, indices) = unit_sphere_mesh(MARKER_SECTORS, MARKER_STACKS);
    let expected_verts = ((MARKER_STACKS + 1) * (MARKER_SECTORS + 1)) as usize;
    assert_eq!(verts.len(), expected_verts);

    // Pole rows contribute one triangle per sector, interior rows two.
    let expected_tris = MARKER_SECTORS * 2 + (MARKER_STACKS - 2) * MARKER_SECTORS * 2;
    assert_eq!(indices.len(), (expected_tris * 3) as usize);
    assert_eq!(indices.len() % 3, 0);
    for &i in &indices {
        assert!((i as usize) < verts.len(), "index {} out of range", i);
    }
}

#[test]
fn unit_sphere_mesh_spans_both_poles() {
    let (verts, _) = unit_sphere_mesh(MARKER_SECTORS, MARKER_STACKS);
    let max_z = verts.iter().map(|v| v[2]).fold(f32::MIN, f32::max);
    let min_z = verts.iter().map(|v| v[2]).fold(f32::MAX, f32::min);
    assert!((max_z - 1.0).abs() < 1e-6);
    assert!((min_z + 1.0).abs() < 1e-6);
}
