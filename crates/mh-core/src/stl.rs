//! STL export and import for cutter and plate solids

use std::collections::HashMap;
use std::io::BufReader;
use std::path::Path;

use crate::constants::STL_VERTEX_PRECISION;
use crate::solid::{SolidMesh, triangle_normal};

/// Save a solid as a binary STL file
///
/// STL carries one normal per facet; per-vertex normals are discarded and
/// facet normals recomputed from the triangle winding.
pub fn save_stl(solid: &SolidMesh, path: impl AsRef<Path>) -> Result<(), StlError> {
    let path = path.as_ref();

    let mut triangles = Vec::with_capacity(solid.triangle_count());
    for chunk in solid.indices.chunks(3) {
        if chunk.len() != 3 {
            continue;
        }

        let v0 = solid.vertices[chunk[0] as usize];
        let v1 = solid.vertices[chunk[1] as usize];
        let v2 = solid.vertices[chunk[2] as usize];
        let normal = triangle_normal(v0, v1, v2);

        triangles.push(stl_io::Triangle {
            normal: stl_io::Normal::new(normal),
            vertices: [
                stl_io::Vertex::new(v0),
                stl_io::Vertex::new(v1),
                stl_io::Vertex::new(v2),
            ],
        });
    }

    let mut file = std::fs::File::create(path).map_err(|e| StlError::Io(e.to_string()))?;
    stl_io::write_stl(&mut file, triangles.iter()).map_err(|e| StlError::Write(e.to_string()))?;

    Ok(())
}

/// Load an STL file into an indexed solid mesh
///
/// Coincident vertices are merged by quantized position, and per-vertex
/// normals are accumulated from the adjacent facet normals.
pub fn load_stl(path: impl AsRef<Path>) -> Result<SolidMesh, StlError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| StlError::Io(e.to_string()))?;
    let mut reader = BufReader::new(file);

    let mesh = stl_io::read_stl(&mut reader).map_err(|e| StlError::Parse(e.to_string()))?;
    Ok(index_mesh(&mesh))
}

/// Convert triangle soup to an indexed mesh with smoothed vertex normals
fn index_mesh(mesh: &stl_io::IndexedMesh) -> SolidMesh {
    let mut vertices: Vec<[f32; 3]> = Vec::new();
    let mut normal_sums: Vec<[f32; 3]> = Vec::new();
    let mut vertex_map: HashMap<[i32; 3], u32> = HashMap::new();
    let mut indices: Vec<u32> = Vec::new();

    for face in &mesh.faces {
        let normal = face.normal;

        for &vertex_idx in &face.vertices {
            let vertex = mesh.vertices[vertex_idx];
            let v = [vertex[0], vertex[1], vertex[2]];

            // Quantize for comparison
            let key = [
                (v[0] * STL_VERTEX_PRECISION) as i32,
                (v[1] * STL_VERTEX_PRECISION) as i32,
                (v[2] * STL_VERTEX_PRECISION) as i32,
            ];

            let index = if let Some(&existing_idx) = vertex_map.get(&key) {
                existing_idx
            } else {
                let new_idx = vertices.len() as u32;
                vertices.push(v);
                normal_sums.push([0.0; 3]);
                vertex_map.insert(key, new_idx);
                new_idx
            };

            let sum = &mut normal_sums[index as usize];
            sum[0] += normal[0];
            sum[1] += normal[1];
            sum[2] += normal[2];

            indices.push(index);
        }
    }

    let normals = normal_sums
        .into_iter()
        .map(|n| {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            if len > 0.0 {
                [n[0] / len, n[1] / len, n[2] / len]
            } else {
                [0.0, 1.0, 0.0]
            }
        })
        .collect();

    SolidMesh {
        vertices,
        normals,
        indices,
    }
}

/// STL-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum StlError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Write error: {0}")]
    Write(String),
}
