//! Counterbore cutter generation

use crate::constants::CUT_OVERSHOOT;
use crate::solid::SolidMesh;

use super::profile::{ProfileRing, revolve_profile};

/// Generate a counterbore cutter: stepped cylinders
///
/// The bore cylinder spans from the top face down to the bore depth, then
/// the shaft cylinder continues to the cut depth. Both ends overshoot so
/// the subtraction is watertight at the faces.
pub fn generate_counterbore_solid(
    diameter: f32,
    bore_diameter: f32,
    bore_depth: f32,
    depth: f32,
) -> SolidMesh {
    let shaft_radius = diameter / 2.0;
    let bore_radius = bore_diameter / 2.0;

    revolve_profile(&[
        ProfileRing {
            radius: bore_radius,
            y: CUT_OVERSHOOT,
        },
        ProfileRing {
            radius: bore_radius,
            y: -bore_depth,
        },
        ProfileRing {
            radius: shaft_radius,
            y: -bore_depth,
        },
        ProfileRing {
            radius: shaft_radius,
            y: -(depth + CUT_OVERSHOOT),
        },
    ])
}
