//! Hole placement tool state machine
//!
//! Decoupled from any real input system: pointer and key events arrive as
//! method calls carrying a pick ray, and results leave through the
//! `PlacementCallbacks` seam. Position resolution per pointer move, in
//! priority order: the baseplate mesh first, then the horizontal plane at
//! the plate's top face, otherwise no preview this frame.

use glam::Vec2;
use uuid::Uuid;

use mh_core::hole::{ConfigError, HoleConfig, HoleKind, PlacedHole};

use crate::raycast::{Ray, RaycastTarget, ray_plane_y_intersection};

/// Sink for placement results
pub trait PlacementCallbacks {
    /// A hole was confirmed at a valid position
    fn on_place(&mut self, hole: PlacedHole);
    /// Placement mode was cancelled
    fn on_cancel(&mut self);
}

/// Placement tool mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementMode {
    /// Not placing
    Idle,
    /// Active with a config; the position is None while the pointer misses
    /// every pick target (nothing is previewed, but placement stays active)
    Previewing { position: Option<Vec2> },
}

/// Interactive hole placement state machine
///
/// Pointer and key handlers are bound only while the tool is active;
/// every exit path (cancel, single-shot placement, teardown) goes through
/// `deactivate`, which drops the config and preview together.
#[derive(Debug, Clone)]
pub struct PlacementTool {
    mode: PlacementMode,
    config: Option<HoleConfig>,
    depth: f32,
    /// Leave placement mode after a successful placement
    single_shot: bool,
}

impl Default for PlacementTool {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementTool {
    pub fn new() -> Self {
        Self {
            mode: PlacementMode::Idle,
            config: None,
            depth: 0.0,
            single_shot: false,
        }
    }

    pub fn with_single_shot(mut self, single_shot: bool) -> Self {
        self.single_shot = single_shot;
        self
    }

    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.mode, PlacementMode::Idle)
    }

    pub fn config(&self) -> Option<HoleConfig> {
        self.config
    }

    /// Current preview position, if the pointer is over a valid target
    pub fn preview_position(&self) -> Option<Vec2> {
        match self.mode {
            PlacementMode::Previewing { position } => position,
            PlacementMode::Idle => None,
        }
    }

    /// Enter placement mode with a config and cut depth
    ///
    /// Depth is validated against the config up front; a through hole
    /// additionally must not be asked to cut deeper than the plate.
    pub fn activate(
        &mut self,
        config: HoleConfig,
        depth: f32,
        plate_thickness: f32,
    ) -> Result<(), ConfigError> {
        config.validate_depth(depth)?;
        if config.kind() == HoleKind::Through && depth > plate_thickness {
            return Err(ConfigError::DepthExceedsPlate {
                depth,
                thickness: plate_thickness,
            });
        }

        self.config = Some(config);
        self.depth = depth;
        self.mode = PlacementMode::Previewing { position: None };
        tracing::info!("placement mode activated ({:?})", config.kind());
        Ok(())
    }

    /// Resolve the preview position for a pointer move
    ///
    /// The baseplate mesh is tried first; on a miss, the horizontal plane
    /// at `top_y` catches rays that slip past the plate edge. When both
    /// miss, the preview disappears for this frame but placement stays
    /// active.
    pub fn pointer_moved(&mut self, ray: &Ray, target: &dyn RaycastTarget, top_y: f32) {
        if !self.is_active() {
            return;
        }

        let position = target
            .raycast(ray)
            .or_else(|| ray_plane_y_intersection(ray, top_y))
            .map(|hit| Vec2::new(hit.x, hit.z));

        self.mode = PlacementMode::Previewing { position };
    }

    /// Confirm a placement at the current preview position
    ///
    /// Rejected when inactive, when no preview position exists, or when
    /// the click landed on interface chrome (`over_ui`). On success the
    /// minted hole is handed to `on_place`; the tool never mutates any
    /// placed-hole collection itself.
    pub fn pointer_clicked(
        &mut self,
        over_ui: bool,
        callbacks: &mut dyn PlacementCallbacks,
    ) -> bool {
        if over_ui {
            return false;
        }
        let (Some(config), Some(position)) = (self.config, self.preview_position()) else {
            return false;
        };

        let hole = PlacedHole {
            id: Uuid::new_v4(),
            config,
            position,
            depth: self.depth,
        };
        tracing::info!("placed hole {} at {:?}", hole.id, hole.position);
        callbacks.on_place(hole);

        if self.single_shot {
            self.deactivate();
        }
        true
    }

    /// Cancel placement mode (the designated cancel key)
    ///
    /// Works from any preview state while active; inactive presses are
    /// ignored.
    pub fn cancel(&mut self, callbacks: &mut dyn PlacementCallbacks) {
        if !self.is_active() {
            return;
        }
        self.deactivate();
        callbacks.on_cancel();
    }

    /// Leave placement mode and release the input bindings
    pub fn deactivate(&mut self) {
        self.mode = PlacementMode::Idle;
        self.config = None;
        tracing::info!("placement mode deactivated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raycast::Baseplate;
    use glam::Vec3;

    #[derive(Default)]
    struct Recorder {
        placed: Vec<PlacedHole>,
        cancels: u32,
    }

    impl PlacementCallbacks for Recorder {
        fn on_place(&mut self, hole: PlacedHole) {
            self.placed.push(hole);
        }
        fn on_cancel(&mut self) {
            self.cancels += 1;
        }
    }

    fn down_ray(x: f32, z: f32) -> Ray {
        Ray::new(Vec3::new(x, 20.0, z), Vec3::NEG_Y)
    }

    fn active_tool(plate: &Baseplate) -> PlacementTool {
        let config = HoleConfig::through(6.0).unwrap();
        let mut tool = PlacementTool::new();
        tool.activate(config, 10.0, plate.thickness).unwrap();
        tool
    }

    #[test]
    fn test_place_through_hole_on_plate() {
        let plate = Baseplate::rectangular(100.0, 10.0, 100.0);
        let mut tool = active_tool(&plate);
        let mut recorder = Recorder::default();

        tool.pointer_moved(&down_ray(12.0, 34.0), &plate, plate.top_y);
        assert!(tool.preview_position().is_some());

        assert!(tool.pointer_clicked(false, &mut recorder));
        assert_eq!(recorder.placed.len(), 1);
        let hole = &recorder.placed[0];
        assert!((hole.position.x - 12.0).abs() < 1e-4);
        assert!((hole.position.y - 34.0).abs() < 1e-4);
        assert_eq!(hole.depth, 10.0);
        assert_eq!(recorder.cancels, 0);
    }

    #[test]
    fn test_plane_fallback_when_plate_missed() {
        let plate = Baseplate::rectangular(100.0, 10.0, 100.0);
        let mut tool = active_tool(&plate);

        // Past the plate edge: the mesh misses but the top plane catches it
        tool.pointer_moved(&down_ray(70.0, 0.0), &plate, plate.top_y);
        let pos = tool.preview_position().unwrap();
        assert!((pos.x - 70.0).abs() < 1e-4);
        assert!((pos.y - 0.0).abs() < 1e-4);
    }

    #[test]
    fn test_no_preview_when_everything_missed() {
        let plate = Baseplate::rectangular(100.0, 10.0, 100.0);
        let mut tool = active_tool(&plate);
        let mut recorder = Recorder::default();

        // Pointing away from plate and plane
        let ray = Ray::new(Vec3::new(0.0, 20.0, 0.0), Vec3::Y);
        tool.pointer_moved(&ray, &plate, plate.top_y);
        assert!(tool.is_active());
        assert!(tool.preview_position().is_none());

        // A click without a preview places nothing
        assert!(!tool.pointer_clicked(false, &mut recorder));
        assert!(recorder.placed.is_empty());
    }

    #[test]
    fn test_click_on_ui_chrome_is_rejected() {
        let plate = Baseplate::rectangular(100.0, 10.0, 100.0);
        let mut tool = active_tool(&plate);
        let mut recorder = Recorder::default();

        tool.pointer_moved(&down_ray(12.0, 34.0), &plate, plate.top_y);
        assert!(tool.preview_position().is_some());

        assert!(!tool.pointer_clicked(true, &mut recorder));
        assert!(recorder.placed.is_empty());
        // Still active; a later click off the chrome works
        assert!(tool.pointer_clicked(false, &mut recorder));
        assert_eq!(recorder.placed.len(), 1);
    }

    #[test]
    fn test_cancel_produces_no_hole() {
        let plate = Baseplate::rectangular(100.0, 10.0, 100.0);
        let mut tool = active_tool(&plate);
        let mut recorder = Recorder::default();

        tool.pointer_moved(&down_ray(12.0, 34.0), &plate, plate.top_y);
        tool.cancel(&mut recorder);

        assert_eq!(recorder.cancels, 1);
        assert!(recorder.placed.is_empty());
        assert!(!tool.is_active());
        assert!(tool.config().is_none());

        // A second press is ignored once idle
        tool.cancel(&mut recorder);
        assert_eq!(recorder.cancels, 1);
    }

    #[test]
    fn test_click_while_idle_is_ignored() {
        let mut tool = PlacementTool::new();
        let mut recorder = Recorder::default();
        assert!(!tool.pointer_clicked(false, &mut recorder));
        assert!(recorder.placed.is_empty());
    }

    #[test]
    fn test_single_shot_leaves_placement_mode() {
        let plate = Baseplate::rectangular(100.0, 10.0, 100.0);
        let config = HoleConfig::through(6.0).unwrap();
        let mut tool = PlacementTool::new().with_single_shot(true);
        tool.activate(config, 10.0, plate.thickness).unwrap();
        let mut recorder = Recorder::default();

        tool.pointer_moved(&down_ray(0.0, 0.0), &plate, plate.top_y);
        assert!(tool.pointer_clicked(false, &mut recorder));
        assert!(!tool.is_active());
        assert!(tool.config().is_none());
    }

    #[test]
    fn test_repeated_placement_mints_fresh_ids() {
        let plate = Baseplate::rectangular(100.0, 10.0, 100.0);
        let mut tool = active_tool(&plate);
        let mut recorder = Recorder::default();

        for i in 0..5 {
            tool.pointer_moved(&down_ray(i as f32, 0.0), &plate, plate.top_y);
            assert!(tool.pointer_clicked(false, &mut recorder));
        }
        assert_eq!(recorder.placed.len(), 5);
        for (i, a) in recorder.placed.iter().enumerate() {
            for b in &recorder.placed[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_activate_rejects_excessive_through_depth() {
        let plate = Baseplate::rectangular(100.0, 10.0, 100.0);
        let config = HoleConfig::through(6.0).unwrap();
        let mut tool = PlacementTool::new();
        assert!(matches!(
            tool.activate(config, 12.0, plate.thickness),
            Err(ConfigError::DepthExceedsPlate { .. })
        ));
        assert!(!tool.is_active());
    }
}
