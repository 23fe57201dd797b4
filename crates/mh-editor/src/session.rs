//! Placement session state
//!
//! Owns the ordered placed-hole list and the per-hole CSG status so the
//! two can never drift apart: adding a hole registers its status and
//! removing a hole drops it.

use glam::Vec2;
use uuid::Uuid;

use mh_core::compound::CompoundSolid;
use mh_core::hole::{ConfigError, HoleConfig, PlacedHole};
use mh_core::position::build_hole_solid;

use crate::csg::CsgStatusTracker;
use crate::placement::PlacementCallbacks;

/// Transient state for one hole placement session
#[derive(Debug, Default)]
pub struct PlacementSession {
    /// Whether placement mode is currently active
    pub active: bool,
    /// Config used for the next placement
    pub current_config: Option<HoleConfig>,
    /// Placed holes in creation order (drives deterministic merge order)
    placed_holes: Vec<PlacedHole>,
    tracker: CsgStatusTracker,
}

impl PlacementSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a placed hole and register it as pending
    pub fn add_hole(&mut self, hole: PlacedHole) {
        self.tracker.insert_pending(hole.id);
        self.placed_holes.push(hole);
    }

    /// Remove a hole and its status entry
    pub fn remove_hole(&mut self, id: Uuid) -> Option<PlacedHole> {
        let index = self.placed_holes.iter().position(|h| h.id == id)?;
        self.tracker.remove(id);
        Some(self.placed_holes.remove(index))
    }

    pub fn hole(&self, id: Uuid) -> Option<&PlacedHole> {
        self.placed_holes.iter().find(|h| h.id == id)
    }

    /// Placed holes in creation order
    pub fn holes(&self) -> &[PlacedHole] {
        &self.placed_holes
    }

    pub fn tracker(&self) -> &CsgStatusTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut CsgStatusTracker {
        &mut self.tracker
    }

    /// Merge the cutters of every hole still awaiting subtraction
    ///
    /// Holes already resolved (ready or failed) are left out; the rest are
    /// merged in creation order.
    pub fn build_pending_compound(&self, top_y: f32) -> Result<CompoundSolid, ConfigError> {
        let mut parts = Vec::new();
        for hole in &self.placed_holes {
            let outstanding = self
                .tracker
                .status(hole.id)
                .is_some_and(|s| s.is_outstanding());
            if outstanding {
                parts.push((hole.id, build_hole_solid(hole, top_y)?));
            }
        }
        Ok(CompoundSolid::merge(parts))
    }

    /// Find a placed hole at the given position, within a pick tolerance
    pub fn hole_at(&self, position: Vec2, tolerance: f32) -> Option<&PlacedHole> {
        self.placed_holes
            .iter()
            .find(|h| h.position.distance(position) <= tolerance + h.config.diameter() / 2.0)
    }
}

impl PlacementCallbacks for PlacementSession {
    fn on_place(&mut self, hole: PlacedHole) {
        self.add_hole(hole);
    }

    fn on_cancel(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csg::CsgStatus;
    use crate::placement::PlacementTool;
    use crate::raycast::{Baseplate, Ray};
    use glam::Vec3;

    fn through_hole(x: f32, z: f32) -> PlacedHole {
        let config = HoleConfig::through(6.0).unwrap();
        PlacedHole::new(config, Vec2::new(x, z), 10.0).unwrap()
    }

    #[test]
    fn test_add_and_remove_keep_status_in_sync() {
        let mut session = PlacementSession::new();
        let hole = through_hole(5.0, 5.0);
        let id = hole.id;

        session.add_hole(hole);
        assert_eq!(session.holes().len(), 1);
        assert_eq!(session.tracker().status(id), Some(&CsgStatus::Pending));

        session.remove_hole(id);
        assert!(session.holes().is_empty());
        assert!(session.tracker().status(id).is_none());
    }

    #[test]
    fn test_pending_compound_covers_every_outstanding_hole_once() {
        let mut session = PlacementSession::new();
        let holes: Vec<Uuid> = (0..3)
            .map(|i| {
                let hole = through_hole(i as f32 * 20.0, 0.0);
                let id = hole.id;
                session.add_hole(hole);
                id
            })
            .collect();

        let compound = session.build_pending_compound(0.0).unwrap();
        assert_eq!(compound.contributing_ids(), holes);

        // Resolve the batch; nothing is outstanding afterwards
        let batch = session.tracker_mut().begin_batch(&compound);
        session.tracker_mut().resolve_batch(&batch, Ok(()));
        let rebuilt = session.build_pending_compound(0.0).unwrap();
        assert!(rebuilt.is_empty());
    }

    #[test]
    fn test_failed_holes_drop_out_of_later_batches() {
        let mut session = PlacementSession::new();
        let hole = through_hole(0.0, 0.0);
        let failed_id = hole.id;
        session.add_hole(hole);

        let compound = session.build_pending_compound(0.0).unwrap();
        let batch = session.tracker_mut().begin_batch(&compound);
        session
            .tracker_mut()
            .resolve_batch(&batch, Err("engine error".to_string()));

        // The failure is visible, and the hole is not resubmitted
        assert!(matches!(
            session.tracker().status(failed_id),
            Some(CsgStatus::Failed(_))
        ));
        let later = through_hole(30.0, 0.0);
        let later_id = later.id;
        session.add_hole(later);
        let rebuilt = session.build_pending_compound(0.0).unwrap();
        assert_eq!(rebuilt.contributing_ids(), vec![later_id]);
    }

    #[test]
    fn test_session_receives_tool_placements() {
        let plate = Baseplate::rectangular(100.0, 10.0, 100.0);
        let mut session = PlacementSession::new();
        session.active = true;

        let config = HoleConfig::through(6.0).unwrap();
        let mut tool = PlacementTool::new();
        tool.activate(config, 10.0, plate.thickness).unwrap();

        let ray = Ray::new(Vec3::new(12.0, 20.0, 34.0), Vec3::NEG_Y);
        tool.pointer_moved(&ray, &plate, plate.top_y);
        assert!(tool.pointer_clicked(false, &mut session));
        assert_eq!(session.holes().len(), 1);

        tool.cancel(&mut session);
        assert!(!session.active);
        assert_eq!(session.holes().len(), 1);
    }

    #[test]
    fn test_hole_at_picks_by_distance() {
        let mut session = PlacementSession::new();
        let hole = through_hole(10.0, 10.0);
        let id = hole.id;
        session.add_hole(hole);

        assert_eq!(session.hole_at(Vec2::new(11.0, 10.0), 0.5).map(|h| h.id), Some(id));
        assert!(session.hole_at(Vec2::new(20.0, 10.0), 0.5).is_none());
    }
}
