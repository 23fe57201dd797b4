//! Baseplate mesh generation

use crate::solid::SolidMesh;

/// Generate a rectangular baseplate solid
///
/// # Arguments
/// * `size` - [width (x), thickness (y), length (z)]
///
/// The plate is centered in XZ with its top face at Y = 0, extending down
/// by the thickness. 24 vertices (4 per face), 12 triangles.
pub fn generate_plate_solid(size: [f32; 3]) -> SolidMesh {
    let hx = size[0] / 2.0;
    let t = size[1];
    let hz = size[2] / 2.0;

    let mut mesh = SolidMesh {
        vertices: Vec::with_capacity(24),
        normals: Vec::with_capacity(24),
        indices: Vec::with_capacity(36),
    };

    // Helper to add a face
    let mut add_face = |corners: [[f32; 3]; 4], normal: [f32; 3]| {
        let base = mesh.vertices.len() as u32;
        for corner in corners {
            mesh.vertices.push(corner);
            mesh.normals.push(normal);
        }
        // Two triangles per face
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    };

    // +X face
    add_face(
        [[hx, -t, -hz], [hx, 0.0, -hz], [hx, 0.0, hz], [hx, -t, hz]],
        [1.0, 0.0, 0.0],
    );

    // -X face
    add_face(
        [
            [-hx, 0.0, -hz],
            [-hx, -t, -hz],
            [-hx, -t, hz],
            [-hx, 0.0, hz],
        ],
        [-1.0, 0.0, 0.0],
    );

    // +Y face (top)
    add_face(
        [
            [-hx, 0.0, hz],
            [hx, 0.0, hz],
            [hx, 0.0, -hz],
            [-hx, 0.0, -hz],
        ],
        [0.0, 1.0, 0.0],
    );

    // -Y face (bottom)
    add_face(
        [[-hx, -t, -hz], [hx, -t, -hz], [hx, -t, hz], [-hx, -t, hz]],
        [0.0, -1.0, 0.0],
    );

    // +Z face
    add_face(
        [[hx, -t, hz], [hx, 0.0, hz], [-hx, 0.0, hz], [-hx, -t, hz]],
        [0.0, 0.0, 1.0],
    );

    // -Z face
    add_face(
        [
            [-hx, -t, -hz],
            [-hx, 0.0, -hz],
            [hx, 0.0, -hz],
            [hx, -t, -hz],
        ],
        [0.0, 0.0, -1.0],
    );

    mesh
}
