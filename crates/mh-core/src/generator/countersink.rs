//! Countersink cutter generation

use crate::constants::CUT_OVERSHOOT;
use crate::solid::SolidMesh;

use super::profile::{ProfileRing, revolve_profile};

/// Depth of the conical section implied by the head geometry
pub fn countersink_cone_depth(diameter: f32, head_diameter: f32, head_angle_degrees: f32) -> f32 {
    let half_angle = (head_angle_degrees / 2.0).to_radians();
    (head_diameter - diameter) / 2.0 / half_angle.tan()
}

/// Generate a countersink cutter: a conical bevel over a straight shaft
///
/// The cone carries the full head diameter at the top face and tapers to
/// the shaft diameter at the depth implied by the head angle. A straight
/// collar above the top face overshoots the surface without widening the
/// cone, and the shaft overshoots the cut depth below.
pub fn generate_countersink_solid(
    diameter: f32,
    head_diameter: f32,
    head_angle_degrees: f32,
    depth: f32,
) -> SolidMesh {
    let shaft_radius = diameter / 2.0;
    let head_radius = head_diameter / 2.0;
    let cone_depth = countersink_cone_depth(diameter, head_diameter, head_angle_degrees);

    revolve_profile(&[
        ProfileRing {
            radius: head_radius,
            y: CUT_OVERSHOOT,
        },
        ProfileRing {
            radius: head_radius,
            y: 0.0,
        },
        ProfileRing {
            radius: shaft_radius,
            y: -cone_depth,
        },
        ProfileRing {
            radius: shaft_radius,
            y: -(depth + CUT_OVERSHOOT),
        },
    ])
}
