//! Profile revolution shared by the hole generators

use std::f32::consts::PI;

use crate::constants::HOLE_SEGMENTS;
use crate::solid::SolidMesh;

/// A circular cross-section of a revolved profile
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProfileRing {
    /// Ring radius
    pub radius: f32,
    /// Ring height along the hole axis
    pub y: f32,
}

/// Revolve a profile of rings around the Y axis
pub(crate) fn revolve_profile(rings: &[ProfileRing]) -> SolidMesh {
    revolve_profile_with_segments(rings, HOLE_SEGMENTS)
}

/// Revolve a profile of rings around the Y axis with custom segment count
///
/// Rings are ordered top to bottom. Generates the lateral surface between
/// each pair of consecutive rings plus flat cap fans at the first and last
/// ring. A pair of rings at the same height produces a flat annulus (the
/// shoulder of a counterbore). Rim vertices are duplicated between bands
/// and caps so each face keeps its own normal.
pub(crate) fn revolve_profile_with_segments(rings: &[ProfileRing], segments: u32) -> SolidMesh {
    debug_assert!(rings.len() >= 2, "a profile needs at least two rings");

    let mut mesh = SolidMesh::new();

    // Lateral bands between consecutive rings
    for pair in rings.windows(2) {
        let (top, bottom) = (pair[0], pair[1]);

        // Outward band normal in the (radial, y) plane, perpendicular to
        // the profile slope
        let dy = top.y - bottom.y;
        let dr = bottom.radius - top.radius;
        let len = (dy * dy + dr * dr).sqrt();
        if len == 0.0 {
            continue;
        }
        let (nr, ny) = (dy / len, dr / len);

        let band_start = mesh.vertices.len() as u32;
        for i in 0..=segments {
            let theta = (i as f32 / segments as f32) * 2.0 * PI;
            let (sin, cos) = theta.sin_cos();
            let normal = [nr * cos, ny, nr * sin];

            // Top vertex, then bottom vertex
            mesh.vertices.push([top.radius * cos, top.y, top.radius * sin]);
            mesh.normals.push(normal);
            mesh.vertices
                .push([bottom.radius * cos, bottom.y, bottom.radius * sin]);
            mesh.normals.push(normal);
        }

        for i in 0..segments {
            let base = band_start + i * 2;
            // Triangle 1
            mesh.indices.push(base);
            mesh.indices.push(base + 2);
            mesh.indices.push(base + 1);
            // Triangle 2
            mesh.indices.push(base + 1);
            mesh.indices.push(base + 2);
            mesh.indices.push(base + 3);
        }
    }

    // Top cap
    let top = rings[0];
    let center_idx = mesh.vertices.len() as u32;
    mesh.vertices.push([0.0, top.y, 0.0]);
    mesh.normals.push([0.0, 1.0, 0.0]);

    let rim_start = mesh.vertices.len() as u32;
    for i in 0..=segments {
        let theta = (i as f32 / segments as f32) * 2.0 * PI;
        let (sin, cos) = theta.sin_cos();
        mesh.vertices.push([top.radius * cos, top.y, top.radius * sin]);
        mesh.normals.push([0.0, 1.0, 0.0]);
    }
    for i in 0..segments {
        mesh.indices.push(center_idx);
        mesh.indices.push(rim_start + i + 1);
        mesh.indices.push(rim_start + i);
    }

    // Bottom cap (reversed winding)
    let bottom = rings[rings.len() - 1];
    let center_idx = mesh.vertices.len() as u32;
    mesh.vertices.push([0.0, bottom.y, 0.0]);
    mesh.normals.push([0.0, -1.0, 0.0]);

    let rim_start = mesh.vertices.len() as u32;
    for i in 0..=segments {
        let theta = (i as f32 / segments as f32) * 2.0 * PI;
        let (sin, cos) = theta.sin_cos();
        mesh.vertices
            .push([bottom.radius * cos, bottom.y, bottom.radius * sin]);
        mesh.normals.push([0.0, -1.0, 0.0]);
    }
    for i in 0..segments {
        mesh.indices.push(center_idx);
        mesh.indices.push(rim_start + i);
        mesh.indices.push(rim_start + i + 1);
    }

    mesh
}
