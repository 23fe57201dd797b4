//! Interactive Mounting Hole Placement
//!
//! State layer for the baseplate hole editor:
//! - raycast: pick rays against the baseplate
//! - placement: the hole placement tool state machine
//! - session: placed hole bookkeeping and compound rebuilds
//! - csg: per-hole boolean subtraction status

pub mod csg;
pub mod placement;
pub mod raycast;
pub mod session;

pub use csg::*;
pub use placement::*;
pub use raycast::*;
pub use session::*;
