//! Hole configuration and placed hole definitions

use glam::Vec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::generator::countersink_cone_depth;
use crate::standards::{CounterboreStandard, CountersinkStandard};

/// Hole type discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoleKind {
    Through,
    Countersink,
    Counterbore,
}

impl HoleKind {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            HoleKind::Through => "Through",
            HoleKind::Countersink => "Countersink",
            HoleKind::Counterbore => "Counterbore",
        }
    }

    /// All hole kinds for UI
    pub fn all() -> &'static [HoleKind] {
        &[HoleKind::Through, HoleKind::Countersink, HoleKind::Counterbore]
    }
}

/// Type-specific hole shape parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HoleStyle {
    /// Straight clearance hole
    Through,
    /// Conical recess so a flat head screw sits flush
    Countersink {
        head_diameter: f32,
        head_angle_degrees: f32,
    },
    /// Cylindrical recess so a cap head screw sits below the surface
    Counterbore { bore_diameter: f32, bore_depth: f32 },
}

impl HoleStyle {
    /// The kind discriminant for this style
    pub fn kind(&self) -> HoleKind {
        match self {
            HoleStyle::Through => HoleKind::Through,
            HoleStyle::Countersink { .. } => HoleKind::Countersink,
            HoleStyle::Counterbore { .. } => HoleKind::Counterbore,
        }
    }
}

/// Raw config fields for deserialization (re-validated on the way in)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HoleConfigData {
    diameter: f32,
    style: HoleStyle,
}

/// Validated description of a hole's shape, independent of where it sits
///
/// Constructed only through the validating constructors; invalid dimensions
/// fail immediately with `ConfigError` and are never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HoleConfigData", into = "HoleConfigData")]
pub struct HoleConfig {
    diameter: f32,
    style: HoleStyle,
}

impl From<HoleConfig> for HoleConfigData {
    fn from(config: HoleConfig) -> Self {
        Self {
            diameter: config.diameter,
            style: config.style,
        }
    }
}

impl TryFrom<HoleConfigData> for HoleConfig {
    type Error = ConfigError;

    fn try_from(data: HoleConfigData) -> Result<Self, ConfigError> {
        match data.style {
            HoleStyle::Through => HoleConfig::through(data.diameter),
            HoleStyle::Countersink {
                head_diameter,
                head_angle_degrees,
            } => HoleConfig::countersink(data.diameter, head_diameter, head_angle_degrees),
            HoleStyle::Counterbore {
                bore_diameter,
                bore_depth,
            } => HoleConfig::counterbore(data.diameter, bore_diameter, bore_depth),
        }
    }
}

impl HoleConfig {
    /// Create a through hole config
    pub fn through(diameter: f32) -> Result<Self, ConfigError> {
        if diameter <= 0.0 {
            return Err(ConfigError::NonPositiveDiameter(diameter));
        }
        Ok(Self {
            diameter,
            style: HoleStyle::Through,
        })
    }

    /// Create a countersink config
    pub fn countersink(
        diameter: f32,
        head_diameter: f32,
        head_angle_degrees: f32,
    ) -> Result<Self, ConfigError> {
        if diameter <= 0.0 {
            return Err(ConfigError::NonPositiveDiameter(diameter));
        }
        if head_diameter <= diameter {
            return Err(ConfigError::HeadNotLargerThanHole {
                head: head_diameter,
                hole: diameter,
            });
        }
        if head_angle_degrees <= 0.0 || head_angle_degrees >= 180.0 {
            return Err(ConfigError::InvalidHeadAngle(head_angle_degrees));
        }
        Ok(Self {
            diameter,
            style: HoleStyle::Countersink {
                head_diameter,
                head_angle_degrees,
            },
        })
    }

    /// Create a counterbore config
    pub fn counterbore(
        diameter: f32,
        bore_diameter: f32,
        bore_depth: f32,
    ) -> Result<Self, ConfigError> {
        if diameter <= 0.0 {
            return Err(ConfigError::NonPositiveDiameter(diameter));
        }
        if bore_diameter <= diameter {
            return Err(ConfigError::BoreNotLargerThanHole {
                bore: bore_diameter,
                hole: diameter,
            });
        }
        if bore_depth <= 0.0 {
            return Err(ConfigError::NonPositiveBoreDepth(bore_depth));
        }
        Ok(Self {
            diameter,
            style: HoleStyle::Counterbore {
                bore_diameter,
                bore_depth,
            },
        })
    }

    /// Create a countersink config from a standards table entry
    pub fn from_countersink_standard(std: &CountersinkStandard) -> Result<Self, ConfigError> {
        Self::countersink(std.hole_diameter, std.head_diameter, std.head_angle_degrees)
    }

    /// Create a counterbore config from a standards table entry
    pub fn from_counterbore_standard(std: &CounterboreStandard) -> Result<Self, ConfigError> {
        Self::counterbore(std.hole_diameter, std.bore_diameter, std.bore_depth)
    }

    /// Clearance hole diameter
    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    /// Type-specific shape parameters
    pub fn style(&self) -> HoleStyle {
        self.style
    }

    /// The hole kind discriminant
    pub fn kind(&self) -> HoleKind {
        self.style.kind()
    }

    /// Check that a cut depth is usable with this config
    ///
    /// The recess of a countersink or counterbore must end above the bottom
    /// of the cut, so the shaft segment below it has positive height.
    pub fn validate_depth(&self, depth: f32) -> Result<(), ConfigError> {
        if depth <= 0.0 {
            return Err(ConfigError::NonPositiveDepth(depth));
        }
        let recess_depth = match self.style {
            HoleStyle::Through => return Ok(()),
            HoleStyle::Countersink {
                head_diameter,
                head_angle_degrees,
            } => countersink_cone_depth(self.diameter, head_diameter, head_angle_degrees),
            HoleStyle::Counterbore { bore_depth, .. } => bore_depth,
        };
        if depth <= recess_depth {
            return Err(ConfigError::DepthTooShallow {
                depth,
                required: recess_depth,
            });
        }
        Ok(())
    }
}

/// A configured hole placed on the baseplate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedHole {
    pub id: Uuid,
    pub config: HoleConfig,
    /// Placement point on the baseplate top face (local XZ plane)
    pub position: Vec2,
    /// Cut depth below the top face
    pub depth: f32,
}

impl PlacedHole {
    /// Create a placed hole with a freshly minted id
    pub fn new(config: HoleConfig, position: Vec2, depth: f32) -> Result<Self, ConfigError> {
        config.validate_depth(depth)?;
        Ok(Self {
            id: Uuid::new_v4(),
            config,
            position,
            depth,
        })
    }
}

/// Hole configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("hole diameter must be positive, got {0}")]
    NonPositiveDiameter(f32),
    #[error("countersink head diameter {head} must exceed hole diameter {hole}")]
    HeadNotLargerThanHole { head: f32, hole: f32 },
    #[error("countersink head angle must be between 0 and 180 degrees, got {0}")]
    InvalidHeadAngle(f32),
    #[error("counterbore diameter {bore} must exceed hole diameter {hole}")]
    BoreNotLargerThanHole { bore: f32, hole: f32 },
    #[error("counterbore depth must be positive, got {0}")]
    NonPositiveBoreDepth(f32),
    #[error("hole depth must be positive, got {0}")]
    NonPositiveDepth(f32),
    #[error("hole depth {depth} does not clear the recess depth {required}")]
    DepthTooShallow { depth: f32, required: f32 },
    #[error("through hole depth {depth} exceeds plate thickness {thickness}")]
    DepthExceedsPlate { depth: f32, thickness: f32 },
}
