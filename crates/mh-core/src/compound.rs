//! Compound geometry for batched boolean subtraction
//!
//! Each boolean against the plate mesh is expensive, so all outstanding
//! cutters are concatenated into one compound mesh and subtracted in a
//! single pass. Buffers are joined with index rebasing only; coincident
//! geometry is not welded, since the cutters need to overlap the plate
//! individually, not to share topology.

use std::ops::Range;

use uuid::Uuid;

use crate::solid::SolidMesh;

/// Range of one contributing hole's geometry inside a compound mesh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmeshRange {
    pub hole_id: Uuid,
    pub vertex_range: Range<usize>,
    pub index_range: Range<usize>,
}

/// Multiple positioned hole cutters concatenated into one mesh
///
/// Per-submesh attribution is preserved so the subtraction result can be
/// reported back per hole.
#[derive(Debug, Clone, Default)]
pub struct CompoundSolid {
    pub mesh: SolidMesh,
    pub submeshes: Vec<SubmeshRange>,
}

impl CompoundSolid {
    /// Merge positioned cutters into a compound, preserving input order
    pub fn merge(parts: impl IntoIterator<Item = (Uuid, SolidMesh)>) -> Self {
        let mut compound = CompoundSolid::default();
        for (hole_id, part) in parts {
            let vertex_start = compound.mesh.vertices.len();
            let index_start = compound.mesh.indices.len();
            compound.mesh.append(&part);
            compound.submeshes.push(SubmeshRange {
                hole_id,
                vertex_range: vertex_start..compound.mesh.vertices.len(),
                index_range: index_start..compound.mesh.indices.len(),
            });
        }
        compound
    }

    /// Hole ids contributing to this compound, in merge order
    pub fn contributing_ids(&self) -> Vec<Uuid> {
        self.submeshes.iter().map(|s| s.hole_id).collect()
    }

    /// Number of contributing holes
    pub fn len(&self) -> usize {
        self.submeshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submeshes.is_empty()
    }

    /// Slice one hole's contribution back out of the compound
    ///
    /// Indices are rebased back to the submesh's own vertex numbering.
    pub fn submesh(&self, hole_id: Uuid) -> Option<SolidMesh> {
        let range = self.submeshes.iter().find(|s| s.hole_id == hole_id)?;
        let base = range.vertex_range.start as u32;
        Some(SolidMesh {
            vertices: self.mesh.vertices[range.vertex_range.clone()].to_vec(),
            normals: self.mesh.normals[range.vertex_range.clone()].to_vec(),
            indices: self.mesh.indices[range.index_range.clone()]
                .iter()
                .map(|i| i - base)
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_hole_solid;
    use crate::hole::HoleConfig;
    use crate::position::position_hole_solid;
    use glam::Vec2;

    fn positioned_cutter(x: f32, z: f32) -> SolidMesh {
        let config = HoleConfig::through(6.0).unwrap();
        let local = generate_hole_solid(&config, 10.0).unwrap();
        position_hole_solid(&local, Vec2::new(x, z), 0.0)
    }

    #[test]
    fn test_merge_vertex_count_is_sum() {
        let parts: Vec<(Uuid, SolidMesh)> = (0..4)
            .map(|i| (Uuid::new_v4(), positioned_cutter(i as f32 * 20.0, 0.0)))
            .collect();
        let total: usize = parts.iter().map(|(_, m)| m.vertex_count()).sum();

        let compound = CompoundSolid::merge(parts.clone());
        assert_eq!(compound.mesh.vertex_count(), total);
        assert_eq!(compound.len(), 4);

        // Every index stays within bounds after rebasing
        let count = compound.mesh.vertex_count() as u32;
        assert!(compound.mesh.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn test_merge_preserves_attribution() {
        let a = (Uuid::new_v4(), positioned_cutter(-10.0, 0.0));
        let b = (Uuid::new_v4(), positioned_cutter(10.0, 5.0));
        let compound = CompoundSolid::merge([a.clone(), b.clone()]);

        assert_eq!(compound.contributing_ids(), vec![a.0, b.0]);
        assert_eq!(compound.submesh(a.0).unwrap(), a.1);
        assert_eq!(compound.submesh(b.0).unwrap(), b.1);
        assert!(compound.submesh(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_empty_merge() {
        let compound = CompoundSolid::merge([]);
        assert!(compound.is_empty());
        assert!(compound.mesh.is_empty());
    }
}
