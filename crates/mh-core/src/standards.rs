//! Standard fastener dimension tables
//!
//! Maps nominal fastener designations to clearance hole, countersink, and
//! counterbore dimensions. All dimensions are in millimeters; metric entries
//! follow DIN/ISO clearance fits, imperial entries their ANSI equivalents.
//! The tables are static and read-only.

/// Countersink dimensions for a flat head screw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountersinkStandard {
    /// Nominal fastener designation (e.g. "M4", "#8")
    pub label: &'static str,
    /// Clearance hole diameter for the screw shaft
    pub hole_diameter: f32,
    /// Major diameter of the conical recess
    pub head_diameter: f32,
    /// Included angle of the cone in degrees
    pub head_angle_degrees: f32,
}

/// Counterbore dimensions for a socket head cap screw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterboreStandard {
    /// Nominal fastener designation (e.g. "M4", "#8")
    pub label: &'static str,
    /// Clearance hole diameter for the screw shaft
    pub hole_diameter: f32,
    /// Diameter of the cylindrical recess
    pub bore_diameter: f32,
    /// Depth of the cylindrical recess
    pub bore_depth: f32,
}

/// Countersunk screw sizes (metric flat heads at 90 degrees, imperial at 82)
pub const COUNTERSINK_STANDARDS: &[CountersinkStandard] = &[
    CountersinkStandard { label: "M2.5", hole_diameter: 2.9, head_diameter: 5.6, head_angle_degrees: 90.0 },
    CountersinkStandard { label: "M3", hole_diameter: 3.4, head_diameter: 6.3, head_angle_degrees: 90.0 },
    CountersinkStandard { label: "M4", hole_diameter: 4.5, head_diameter: 8.4, head_angle_degrees: 90.0 },
    CountersinkStandard { label: "M5", hole_diameter: 5.5, head_diameter: 10.4, head_angle_degrees: 90.0 },
    CountersinkStandard { label: "M6", hole_diameter: 6.6, head_diameter: 12.6, head_angle_degrees: 90.0 },
    CountersinkStandard { label: "M8", hole_diameter: 9.0, head_diameter: 17.3, head_angle_degrees: 90.0 },
    CountersinkStandard { label: "M10", hole_diameter: 11.0, head_diameter: 20.0, head_angle_degrees: 90.0 },
    CountersinkStandard { label: "#4", hole_diameter: 3.0, head_diameter: 5.7, head_angle_degrees: 82.0 },
    CountersinkStandard { label: "#6", hole_diameter: 3.7, head_diameter: 7.0, head_angle_degrees: 82.0 },
    CountersinkStandard { label: "#8", hole_diameter: 4.3, head_diameter: 8.3, head_angle_degrees: 82.0 },
    CountersinkStandard { label: "#10", hole_diameter: 5.0, head_diameter: 9.6, head_angle_degrees: 82.0 },
    CountersinkStandard { label: "1/4", hole_diameter: 6.8, head_diameter: 12.6, head_angle_degrees: 82.0 },
    CountersinkStandard { label: "3/8", hole_diameter: 10.0, head_diameter: 18.8, head_angle_degrees: 82.0 },
];

/// Socket head cap screw sizes (metric DIN 912, imperial ANSI B18.3)
pub const COUNTERBORE_STANDARDS: &[CounterboreStandard] = &[
    CounterboreStandard { label: "M2.5", hole_diameter: 2.9, bore_diameter: 5.0, bore_depth: 2.8 },
    CounterboreStandard { label: "M3", hole_diameter: 3.4, bore_diameter: 6.0, bore_depth: 3.4 },
    CounterboreStandard { label: "M4", hole_diameter: 4.5, bore_diameter: 8.0, bore_depth: 4.4 },
    CounterboreStandard { label: "M5", hole_diameter: 5.5, bore_diameter: 10.0, bore_depth: 5.4 },
    CounterboreStandard { label: "M6", hole_diameter: 6.6, bore_diameter: 11.0, bore_depth: 6.5 },
    CounterboreStandard { label: "M8", hole_diameter: 9.0, bore_diameter: 15.0, bore_depth: 8.6 },
    CounterboreStandard { label: "M10", hole_diameter: 11.0, bore_diameter: 18.0, bore_depth: 10.8 },
    CounterboreStandard { label: "#4", hole_diameter: 3.0, bore_diameter: 4.6, bore_depth: 3.2 },
    CounterboreStandard { label: "#6", hole_diameter: 3.7, bore_diameter: 5.7, bore_depth: 3.8 },
    CounterboreStandard { label: "#8", hole_diameter: 4.3, bore_diameter: 6.9, bore_depth: 4.5 },
    CounterboreStandard { label: "#10", hole_diameter: 5.0, bore_diameter: 8.0, bore_depth: 5.1 },
    CounterboreStandard { label: "1/4", hole_diameter: 6.8, bore_diameter: 10.3, bore_depth: 6.7 },
    CounterboreStandard { label: "3/8", hole_diameter: 10.0, bore_diameter: 14.9, bore_depth: 9.8 },
];

/// Look up a countersink standard by its nominal designation
pub fn countersink_standard(label: &str) -> Result<&'static CountersinkStandard, StandardError> {
    COUNTERSINK_STANDARDS
        .iter()
        .find(|s| s.label == label)
        .ok_or_else(|| StandardError::UnknownStandard(label.to_string()))
}

/// Look up a counterbore standard by its nominal designation
pub fn counterbore_standard(label: &str) -> Result<&'static CounterboreStandard, StandardError> {
    COUNTERBORE_STANDARDS
        .iter()
        .find(|s| s.label == label)
        .ok_or_else(|| StandardError::UnknownStandard(label.to_string()))
}

/// Standards table errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum StandardError {
    #[error("unknown fastener standard: {0}")]
    UnknownStandard(String),
}
