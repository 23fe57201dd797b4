//! Global constants for mh-core

/// Default number of segments when revolving hole profiles into meshes
pub const HOLE_SEGMENTS: u32 = 32;

/// Margin a cutter solid extends above the plate top face and below its cut
/// depth so the boolean subtraction stays watertight at both faces (mm)
pub const CUT_OVERSHOOT: f32 = 0.1;

/// STL vertex comparison precision (multiply by this, then round to int)
pub const STL_VERTEX_PRECISION: f32 = 10000.0;

/// Current file format version for serialized hole geometry
pub const GEOMETRY_FORMAT_VERSION: u32 = 1;
