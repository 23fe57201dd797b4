//! Mounting Hole Editor Core Data Structures
//!
//! This crate contains the geometry core for baseplate hole editing:
//! - HoleConfig / PlacedHole: parametric hole descriptions
//! - standards: fastener dimension tables for countersinks and counterbores
//! - generator: solid cutter mesh generation per hole type
//! - compound: merging positioned cutters for a single boolean subtraction
//! - codec: persistable geometry representation

pub mod codec;
pub mod compound;
pub mod constants;
pub mod generator;
pub mod hole;
pub mod position;
pub mod solid;
pub mod standards;
pub mod stl;

pub use codec::*;
pub use compound::*;
pub use constants::*;
pub use generator::*;
pub use hole::*;
pub use position::*;
pub use solid::*;
pub use standards::*;
pub use stl::*;
