//! Cutter solid generation
//!
//! Turns a validated hole configuration plus a cut depth into a watertight
//! solid mesh, one generator per hole type:
//! - Through (straight cylinder)
//! - Countersink (conical bevel over a straight shaft)
//! - Counterbore (stepped cylinders)
//!
//! All cutters are in hole-local coordinates: origin at the placement point
//! on the plate top face, +Y up, the cut extending downward.

mod counterbore;
mod countersink;
mod plate;
mod profile;
mod through;

pub use counterbore::generate_counterbore_solid;
pub use countersink::{countersink_cone_depth, generate_countersink_solid};
pub use plate::generate_plate_solid;
pub use through::generate_through_solid;

use crate::hole::{ConfigError, HoleConfig, HoleStyle};
use crate::solid::SolidMesh;

/// Generate the cutter solid for a hole configuration
///
/// Dispatch over the hole style is exhaustive; a config that cannot hold the
/// requested depth fails with `ConfigError` before any geometry is built.
pub fn generate_hole_solid(config: &HoleConfig, depth: f32) -> Result<SolidMesh, ConfigError> {
    config.validate_depth(depth)?;
    let solid = match config.style() {
        HoleStyle::Through => generate_through_solid(config.diameter(), depth),
        HoleStyle::Countersink {
            head_diameter,
            head_angle_degrees,
        } => generate_countersink_solid(config.diameter(), head_diameter, head_angle_degrees, depth),
        HoleStyle::Counterbore {
            bore_diameter,
            bore_depth,
        } => generate_counterbore_solid(config.diameter(), bore_diameter, bore_depth, depth),
    };
    Ok(solid)
}
