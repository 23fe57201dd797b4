//! Through hole cutter generation

use crate::constants::CUT_OVERSHOOT;
use crate::solid::SolidMesh;

use super::profile::{ProfileRing, revolve_profile};

/// Generate a straight cylinder cutter for a through hole
///
/// The cylinder starts just above the plate top face and ends just below
/// the cut depth so the subtraction is watertight at both faces.
pub fn generate_through_solid(diameter: f32, depth: f32) -> SolidMesh {
    let radius = diameter / 2.0;
    revolve_profile(&[
        ProfileRing {
            radius,
            y: CUT_OVERSHOOT,
        },
        ProfileRing {
            radius,
            y: -(depth + CUT_OVERSHOOT),
        },
    ])
}
