use egui::{Pos2, Vec2};

use crate::star::StarId;

/// An in-progress pointer drag of one star.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    id: u64,
    star_id: StarId,
    grab_offset: Vec2,
}

impl DragSession {
    /// Serial number of the session, unique per board.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn star_id(&self) -> &StarId {
        &self.star_id
    }

    /// Vector from the star's top-left corner to the pointer, captured when the drag began.
    pub fn grab_offset(&self) -> Vec2 {
        self.grab_offset
    }

    /// Where the star goes when the pointer is at `pointer`.
    pub fn star_position_for(&self, pointer: Pos2) -> Pos2 {
        pointer - self.grab_offset
    }
}

/// Owns the (at most one) active drag session.
#[derive(Debug, Default)]
pub(super) struct DragTracker {
    next_id: u64,
    active: Option<DragSession>,
}

impl DragTracker {
    pub(super) fn active(&self) -> Option<&DragSession> {
        self.active.as_ref()
    }

    /// Open a session, replacing any active one (last write wins).
    pub(super) fn begin(&mut self, star_id: StarId, grab_offset: Vec2) -> String {
        let id = self.next_id.max(1);
        self.next_id = id.saturating_add(1);

        let replaced = self.active.take();
        let message = match &replaced {
            Some(prev) => format!(
                "drag START id={id} star={star_id} (replaces id={} star={})",
                prev.id, prev.star_id
            ),
            None => format!("drag START id={id} star={star_id}"),
        };

        self.active = Some(DragSession {
            id,
            star_id,
            grab_offset,
        });
        message
    }

    pub(super) fn end(&mut self) -> Option<DragSession> {
        self.active.take()
    }

    /// End the session if it is dragging `star_id`.
    pub(super) fn end_if_dragging(&mut self, star_id: &StarId) -> Option<DragSession> {
        if self.active.as_ref().is_some_and(|s| &s.star_id == star_id) {
            self.active.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_get_increasing_ids_and_replace_each_other() {
        let mut tracker = DragTracker::default();
        tracker.begin("a".into(), Vec2::new(1.0, 2.0));
        let message = tracker.begin("b".into(), Vec2::ZERO);
        assert!(message.contains("replaces id=1 star=a"), "{message}");

        let active = tracker.active().expect("active session");
        assert_eq!(active.id(), 2);
        assert_eq!(active.star_id().as_str(), "b");

        assert!(tracker.end_if_dragging(&"a".into()).is_none());
        assert!(tracker.end_if_dragging(&"b".into()).is_some());
        assert!(tracker.end().is_none());
    }

    #[test]
    fn grab_offset_is_kept_under_the_pointer() {
        let mut tracker = DragTracker::default();
        tracker.begin("a".into(), Vec2::new(4.0, 6.0));
        let session = tracker.active().expect("active session");
        assert_eq!(
            session.star_position_for(Pos2::new(100.0, 50.0)),
            Pos2::new(96.0, 44.0)
        );
    }
}
