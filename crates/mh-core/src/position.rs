//! Positioning hole cutters on the baseplate

use glam::{Vec2, Vec3};

use crate::generator::generate_hole_solid;
use crate::hole::{ConfigError, PlacedHole};
use crate::solid::SolidMesh;

/// Translate a hole-local cutter to its place on the baseplate
///
/// `position` is the placement point in the plate's local XZ plane and
/// `top_y` the Y coordinate of the plate's top face. Holes are always cut
/// normal to the top face, so positioning is a pure translation.
pub fn position_hole_solid(solid: &SolidMesh, position: Vec2, top_y: f32) -> SolidMesh {
    solid.translated(Vec3::new(position.x, top_y, position.y))
}

/// Generate and position the cutter solid for a placed hole
pub fn build_hole_solid(hole: &PlacedHole, top_y: f32) -> Result<SolidMesh, ConfigError> {
    let solid = generate_hole_solid(&hole.config, hole.depth)?;
    Ok(position_hole_solid(&solid, hole.position, top_y))
}
