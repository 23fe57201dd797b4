//! Solid mesh value type

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh describing a solid
///
/// Vertices carry per-vertex normals; indices form a triangle list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolidMesh {
    pub vertices: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl SolidMesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Calculate the bounding box, or None for an empty mesh
    pub fn bounding_box(&self) -> Option<([f32; 3], [f32; 3])> {
        if self.vertices.is_empty() {
            return None;
        }

        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];

        for v in &self.vertices {
            for i in 0..3 {
                min[i] = min[i].min(v[i]);
                max[i] = max[i].max(v[i]);
            }
        }

        Some((min, max))
    }

    /// Return a copy translated by the given offset (normals unchanged)
    pub fn translated(&self, offset: Vec3) -> SolidMesh {
        SolidMesh {
            vertices: self
                .vertices
                .iter()
                .map(|v| [v[0] + offset.x, v[1] + offset.y, v[2] + offset.z])
                .collect(),
            normals: self.normals.clone(),
            indices: self.indices.clone(),
        }
    }

    /// Append another mesh, rebasing its indices past the current vertices
    pub fn append(&mut self, other: &SolidMesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }
}

/// Calculate the unit normal of a single triangle
pub fn triangle_normal(v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> [f32; 3] {
    let e1 = Vec3::from(v1) - Vec3::from(v0);
    let e2 = Vec3::from(v2) - Vec3::from(v0);
    let cross = e1.cross(e2);
    if cross.length() > 0.0 {
        cross.normalize().to_array()
    } else {
        [0.0, 0.0, 1.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> SolidMesh {
        SolidMesh {
            vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
            normals: vec![[0.0, 1.0, 0.0]; 3],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_bounding_box() {
        let mesh = unit_triangle();
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, [0.0, 0.0, 0.0]);
        assert_eq!(max, [1.0, 0.0, 1.0]);
        assert!(SolidMesh::new().bounding_box().is_none());
    }

    #[test]
    fn test_translated() {
        let mesh = unit_triangle().translated(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.vertices[0], [1.0, 2.0, 3.0]);
        assert_eq!(mesh.vertices[1], [2.0, 2.0, 3.0]);
        // Normals are not affected by translation
        assert_eq!(mesh.normals[0], [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_append_rebases_indices() {
        let mut a = unit_triangle();
        let b = unit_triangle();
        a.append(&b);
        assert_eq!(a.vertex_count(), 6);
        assert_eq!(a.triangle_count(), 2);
        assert_eq!(&a.indices[3..], &[3, 4, 5]);
    }

    #[test]
    fn test_triangle_normal() {
        let n = triangle_normal([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert_eq!(n, [0.0, 0.0, 1.0]);
        // Degenerate triangle falls back to +Z
        let n = triangle_normal([0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
        assert_eq!(n, [0.0, 0.0, 1.0]);
    }
}
