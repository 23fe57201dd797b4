//! Persistable hole geometry representation
//!
//! Computed cutter solids are expensive enough to be worth snapshotting:
//! an external history system can serialize them here and restore the
//! exact geometry without regeneration. Full-precision encoding, so a
//! round trip reproduces coordinates bit for bit. Files carry a format
//! version tag; unsupported versions are rejected outright instead of
//! being partially read.

use std::ops::Range;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::compound::{CompoundSolid, SubmeshRange};
use crate::constants::GEOMETRY_FORMAT_VERSION;
use crate::hole::{HoleConfig, PlacedHole};
use crate::solid::SolidMesh;

/// Persisted form of a single placed hole's computed cutter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedHoleGeometry {
    pub format_version: u32,
    pub hole_id: Uuid,
    pub config: HoleConfig,
    /// Placement point on the baseplate top face (local XZ plane)
    pub position: Vec2,
    pub depth: f32,
    /// Vertex positions, 3 floats per vertex
    pub vertices: Vec<f32>,
    /// Per-vertex normals, 3 floats per vertex
    pub normals: Vec<f32>,
    /// Triangle indices, 3 per triangle
    pub indices: Vec<u32>,
}

impl SerializedHoleGeometry {
    /// Capture a placed hole and its computed cutter
    pub fn encode(hole: &PlacedHole, solid: &SolidMesh) -> Self {
        Self {
            format_version: GEOMETRY_FORMAT_VERSION,
            hole_id: hole.id,
            config: hole.config,
            position: hole.position,
            depth: hole.depth,
            vertices: bytemuck::cast_slice(&solid.vertices).to_vec(),
            normals: bytemuck::cast_slice(&solid.normals).to_vec(),
            indices: solid.indices.clone(),
        }
    }

    /// Reconstruct the placed hole and its cutter
    pub fn decode(&self) -> Result<(PlacedHole, SolidMesh), CodecError> {
        check_version(self.format_version)?;
        let (vertices, normals) = unflatten_buffers(&self.vertices, &self.normals)?;
        check_indices(&self.indices, vertices.len())?;

        let hole = PlacedHole {
            id: self.hole_id,
            config: self.config,
            position: self.position,
            depth: self.depth,
        };
        let solid = SolidMesh {
            vertices,
            normals,
            indices: self.indices.clone(),
        };
        Ok((hole, solid))
    }

    /// Serialize to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        to_ron_bytes(self)
    }

    /// Deserialize from bytes
    pub fn from_bytes(data: &[u8]) -> Result<Self, CodecError> {
        from_ron_bytes(data)
    }

    /// Save to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CodecError> {
        let content = self.to_bytes()?;
        std::fs::write(path.as_ref(), content).map_err(|e| CodecError::Io(e.to_string()))?;
        Ok(())
    }

    /// Load from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        let content =
            std::fs::read(path.as_ref()).map_err(|e| CodecError::Io(e.to_string()))?;
        Self::from_bytes(&content)
    }
}

/// Persisted form of a compound cutter with per-hole attribution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedCompound {
    pub format_version: u32,
    pub vertices: Vec<f32>,
    pub normals: Vec<f32>,
    pub indices: Vec<u32>,
    pub submeshes: Vec<SerializedSubmesh>,
}

/// Attribution entry of a serialized compound
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedSubmesh {
    pub hole_id: Uuid,
    pub vertex_range: Range<usize>,
    pub index_range: Range<usize>,
}

impl SerializedCompound {
    /// Capture a compound cutter
    pub fn encode(compound: &CompoundSolid) -> Self {
        Self {
            format_version: GEOMETRY_FORMAT_VERSION,
            vertices: bytemuck::cast_slice(&compound.mesh.vertices).to_vec(),
            normals: bytemuck::cast_slice(&compound.mesh.normals).to_vec(),
            indices: compound.mesh.indices.clone(),
            submeshes: compound
                .submeshes
                .iter()
                .map(|s| SerializedSubmesh {
                    hole_id: s.hole_id,
                    vertex_range: s.vertex_range.clone(),
                    index_range: s.index_range.clone(),
                })
                .collect(),
        }
    }

    /// Reconstruct the compound cutter
    pub fn decode(&self) -> Result<CompoundSolid, CodecError> {
        check_version(self.format_version)?;
        let (vertices, normals) = unflatten_buffers(&self.vertices, &self.normals)?;
        check_indices(&self.indices, vertices.len())?;

        let mut submeshes = Vec::with_capacity(self.submeshes.len());
        for s in &self.submeshes {
            if s.vertex_range.end > vertices.len() || s.index_range.end > self.indices.len() {
                return Err(CodecError::Malformed(format!(
                    "submesh range out of bounds for hole {}",
                    s.hole_id
                )));
            }
            submeshes.push(SubmeshRange {
                hole_id: s.hole_id,
                vertex_range: s.vertex_range.clone(),
                index_range: s.index_range.clone(),
            });
        }

        Ok(CompoundSolid {
            mesh: SolidMesh {
                vertices,
                normals,
                indices: self.indices.clone(),
            },
            submeshes,
        })
    }

    /// Serialize to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        to_ron_bytes(self)
    }

    /// Deserialize from bytes
    pub fn from_bytes(data: &[u8]) -> Result<Self, CodecError> {
        from_ron_bytes(data)
    }

    /// Save to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CodecError> {
        let content = self.to_bytes()?;
        std::fs::write(path.as_ref(), content).map_err(|e| CodecError::Io(e.to_string()))?;
        Ok(())
    }

    /// Load from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        let content =
            std::fs::read(path.as_ref()).map_err(|e| CodecError::Io(e.to_string()))?;
        Self::from_bytes(&content)
    }
}

fn check_version(found: u32) -> Result<(), CodecError> {
    if found != GEOMETRY_FORMAT_VERSION {
        return Err(CodecError::UnsupportedFormatVersion {
            found,
            supported: GEOMETRY_FORMAT_VERSION,
        });
    }
    Ok(())
}

fn unflatten_buffers(
    vertices: &[f32],
    normals: &[f32],
) -> Result<(Vec<[f32; 3]>, Vec<[f32; 3]>), CodecError> {
    if vertices.len() % 3 != 0 {
        return Err(CodecError::Malformed(format!(
            "vertex buffer length {} is not a multiple of 3",
            vertices.len()
        )));
    }
    if normals.len() != vertices.len() {
        return Err(CodecError::Malformed(format!(
            "normal buffer length {} does not match vertex buffer length {}",
            normals.len(),
            vertices.len()
        )));
    }
    Ok((
        bytemuck::cast_slice(vertices).to_vec(),
        bytemuck::cast_slice(normals).to_vec(),
    ))
}

fn check_indices(indices: &[u32], vertex_count: usize) -> Result<(), CodecError> {
    if indices.len() % 3 != 0 {
        return Err(CodecError::Malformed(format!(
            "index buffer length {} is not a multiple of 3",
            indices.len()
        )));
    }
    if let Some(&bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(CodecError::Malformed(format!(
            "index {} out of bounds for {} vertices",
            bad, vertex_count
        )));
    }
    Ok(())
}

fn to_ron_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    let content = ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
        .map_err(|e| CodecError::Serialize(e.to_string()))?;
    Ok(content.into_bytes())
}

fn from_ron_bytes<T: for<'de> Deserialize<'de>>(data: &[u8]) -> Result<T, CodecError> {
    let content = std::str::from_utf8(data).map_err(|e| CodecError::Deserialize(e.to_string()))?;
    ron::from_str(content).map_err(|e| CodecError::Deserialize(e.to_string()))
}

/// Geometry codec errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum CodecError {
    #[error("unsupported geometry format version {found} (supported: {supported})")]
    UnsupportedFormatVersion { found: u32, supported: u32 },
    #[error("malformed geometry data: {0}")]
    Malformed(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("serialization error: {0}")]
    Serialize(String),
    #[error("deserialization error: {0}")]
    Deserialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound::CompoundSolid;
    use crate::generator::generate_hole_solid;
    use crate::hole::HoleConfig;
    use crate::position::build_hole_solid;

    fn sample_hole() -> (PlacedHole, SolidMesh) {
        let config = HoleConfig::countersink(4.5, 8.4, 90.0).unwrap();
        let hole = PlacedHole::new(config, Vec2::new(12.0, -7.5), 10.0).unwrap();
        let solid = generate_hole_solid(&hole.config, hole.depth).unwrap();
        (hole, solid)
    }

    #[test]
    fn test_hole_geometry_round_trip_is_exact() {
        let (hole, solid) = sample_hole();
        let encoded = SerializedHoleGeometry::encode(&hole, &solid);
        let bytes = encoded.to_bytes().unwrap();
        let decoded = SerializedHoleGeometry::from_bytes(&bytes).unwrap();
        let (hole2, solid2) = decoded.decode().unwrap();

        assert_eq!(hole2.id, hole.id);
        assert_eq!(hole2.config, hole.config);
        assert_eq!(hole2.position, hole.position);
        assert_eq!(hole2.depth, hole.depth);
        // Full precision encoding: bit-identical coordinates
        assert_eq!(solid2, solid);
    }

    #[test]
    fn test_compound_round_trip() {
        let (a, _) = sample_hole();
        let (b, _) = sample_hole();
        let compound = CompoundSolid::merge([
            (a.id, build_hole_solid(&a, 0.0).unwrap()),
            (b.id, build_hole_solid(&b, 0.0).unwrap()),
        ]);

        let bytes = SerializedCompound::encode(&compound).to_bytes().unwrap();
        let decoded = SerializedCompound::from_bytes(&bytes).unwrap().decode().unwrap();

        assert_eq!(decoded.mesh, compound.mesh);
        assert_eq!(decoded.contributing_ids(), compound.contributing_ids());
        assert_eq!(decoded.submesh(a.id), compound.submesh(a.id));
    }

    #[test]
    fn test_unsupported_format_version() {
        let (hole, solid) = sample_hole();
        let mut encoded = SerializedHoleGeometry::encode(&hole, &solid);
        encoded.format_version = GEOMETRY_FORMAT_VERSION + 1;
        assert!(matches!(
            encoded.decode(),
            Err(CodecError::UnsupportedFormatVersion { .. })
        ));
    }

    #[test]
    fn test_malformed_buffers_rejected() {
        let (hole, solid) = sample_hole();

        let mut truncated = SerializedHoleGeometry::encode(&hole, &solid);
        truncated.vertices.pop();
        assert!(matches!(
            truncated.decode(),
            Err(CodecError::Malformed(_))
        ));

        let mut bad_index = SerializedHoleGeometry::encode(&hole, &solid);
        let count = solid.vertex_count() as u32;
        bad_index.indices[0] = count;
        assert!(matches!(
            bad_index.decode(),
            Err(CodecError::Malformed(_))
        ));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hole.ron");

        let (hole, solid) = sample_hole();
        let encoded = SerializedHoleGeometry::encode(&hole, &solid);
        encoded.save(&path).unwrap();

        let loaded = SerializedHoleGeometry::load(&path).unwrap();
        let (hole2, solid2) = loaded.decode().unwrap();
        assert_eq!(hole2.id, hole.id);
        assert_eq!(solid2, solid);
    }
}
