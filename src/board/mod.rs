use std::collections::VecDeque;

use ahash::AHashMap;
use egui::{Pos2, Vec2};

use crate::data::StarRecord;
use crate::star::{Star, StarAge, StarId};
use crate::stats::RangeStats;

mod debug;
mod geometry;
mod input;
mod options;
mod session;
mod snapshot;


pub use input::{BoardInput, BoardResponse};
pub use options::StarBoardOptions;
pub use session::DragSession;
pub use snapshot::StarSnapshot;

use debug::summarize_ids;
use geometry::{measured_size, offset_from_position, position_from_offset};
use session::DragTracker;

/// State of a board of draggable stars.
///
/// Current scope:
/// - Startup from a record list, add and delete.
/// - Layout: every star's `position` is `offset + board_center` once the board size is known.
/// - Drag: one session at a time, the dragged star follows the pointer with a fixed grip point.
///
/// Every change publishes a new [`StarSnapshot`]; operations that change nothing (unknown ids,
/// no active drag, unmeasured sizes) leave the snapshot untouched.
#[derive(Debug)]
pub struct StarBoard {
    pub options: StarBoardOptions,

    stars: AHashMap<StarId, Star>,
    order: Vec<StarId>,
    board_size: Option<Vec2>,

    drag: DragTracker,

    snapshot: StarSnapshot,
    debug_log: VecDeque<String>,
}

impl Default for StarBoard {
    fn default() -> Self {
        Self::new_with_options(StarBoardOptions::default())
    }
}

impl StarBoard {
    /// An empty board of unknown size.
    pub fn new_with_options(options: StarBoardOptions) -> Self {
        Self {
            options,
            stars: AHashMap::new(),
            order: Vec::new(),
            board_size: None,
            drag: DragTracker::default(),
            snapshot: StarSnapshot::default(),
            debug_log: VecDeque::new(),
        }
    }

    /// Build the board from the startup records and lay it out for `width` x `height`.
    ///
    /// Records without an offset start at the board center. If the size is not usable yet,
    /// the stars stay unpositioned until the first [`Self::resize`].
    pub fn initialize(
        records: impl IntoIterator<Item = StarRecord>,
        width: f32,
        height: f32,
    ) -> Self {
        Self::initialize_with_options(records, width, height, StarBoardOptions::default())
    }

    pub fn initialize_with_options(
        records: impl IntoIterator<Item = StarRecord>,
        width: f32,
        height: f32,
        options: StarBoardOptions,
    ) -> Self {
        let mut board = Self::new_with_options(options);
        board.reset(records, width, height);
        board
    }

    /// Throw away all stars and the drag session, then initialize again.
    pub fn reset(
        &mut self,
        records: impl IntoIterator<Item = StarRecord>,
        width: f32,
        height: f32,
    ) {
        self.stars.clear();
        self.order.clear();
        self.drag.end();

        for record in records {
            let star = Star::with_offset(
                record.id.clone(),
                record.age,
                record.offset.unwrap_or(Vec2::ZERO),
            );
            // Later duplicates overwrite earlier ones but keep the first slot.
            if self.stars.insert(record.id.clone(), star).is_none() {
                self.order.push(record.id);
            }
        }

        self.board_size = measured_size(width, height);
        self.position_all();
        self.commit();
        self.debug_log_event(format!(
            "reset stars={} size={:?} ids={}",
            self.order.len(),
            self.board_size,
            summarize_ids(&self.order, 8)
        ));
    }

    /// Lay every star out for a new board size.
    ///
    /// Returns `false` (and changes nothing) if either dimension is zero, negative or not finite.
    /// The dragged star, if any, is laid out from its offset like every other star.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let Some(size) = measured_size(width, height) else {
            log::trace!("resize ignored: unmeasured size {width}x{height}");
            return false;
        };

        let size_changed = self.board_size != Some(size);
        self.board_size = Some(size);
        let moved = self.position_all();
        if size_changed || moved {
            self.commit();
            self.debug_log_event(format!("resize {width}x{height} moved={moved}"));
        }
        true
    }

    /// Add a star at the board center and return its fresh id.
    pub fn add_star(&mut self, age: impl Into<StarAge>) -> StarId {
        let mut id = StarId::random();
        while self.stars.contains_key(&id) {
            id = StarId::random();
        }

        let mut star = Star::new(id.clone(), age.into());
        let position = self
            .board_size
            .map(|size| position_from_offset(star.offset(), size));
        star.set_position(position);
        let age = star.age().to_string();
        self.stars.insert(id.clone(), star);
        self.order.push(id.clone());

        self.commit();
        self.debug_log_event(format!("add star={id} age={age}"));
        id
    }

    /// Remove a star. Unknown ids are ignored (returns `false`).
    pub fn delete_star(&mut self, id: &StarId) -> bool {
        if self.stars.remove(id).is_none() {
            log::trace!("delete ignored: unknown star={id}");
            return false;
        }
        self.order.retain(|existing| existing != id);

        if let Some(session) = self.drag.end_if_dragging(id) {
            self.debug_log_event(format!(
                "drag END id={} star={id} (star deleted)",
                session.id()
            ));
        }

        self.commit();
        self.debug_log_event(format!("delete star={id}"));
        true
    }

    /// Start dragging `id`, grabbed at `pointer` while the star is drawn at `star_position`.
    ///
    /// Replaces any active session. Unknown ids are ignored (returns `false`).
    pub fn begin_drag(&mut self, id: &StarId, pointer: Pos2, star_position: Pos2) -> bool {
        if !self.stars.contains_key(id) {
            log::trace!("begin_drag ignored: unknown star={id}");
            return false;
        }
        let message = self.drag.begin(id.clone(), pointer - star_position);
        self.debug_log_event(message);
        true
    }

    /// Move the dragged star so the grip point stays under `pointer`.
    ///
    /// No-op (returns `false`) without an active session. The position is written directly; the
    /// star's offset is not touched until the drag ends (and only then if
    /// [`StarBoardOptions::sync_offset_on_drop`] is set).
    pub fn update_drag(&mut self, pointer: Pos2) -> bool {
        let Some(session) = self.drag.active() else {
            return false;
        };
        let position = session.star_position_for(pointer);
        let Some(star) = self.stars.get_mut(session.star_id()) else {
            return false;
        };

        log::trace!("drag MOVE star={} to {position:?}", star.id());
        star.set_position(Some(position));
        self.commit();
        true
    }

    /// Close the drag session. No-op (returns `false`) if none is active.
    pub fn end_drag(&mut self) -> bool {
        let Some(session) = self.drag.end() else {
            return false;
        };

        let mut synced = None;
        if self.options.sync_offset_on_drop
            && let Some(size) = self.board_size
            && let Some(star) = self.stars.get_mut(session.star_id())
            && let Some(position) = star.position()
        {
            let offset = offset_from_position(position, size);
            star.set_offset(offset);
            synced = Some(offset);
        }
        if synced.is_some() {
            self.commit();
        }

        self.debug_log_event(format!(
            "drag END id={} star={} synced_offset={synced:?}",
            session.id(),
            session.star_id()
        ));
        true
    }

    /// The current published collection.
    pub fn snapshot(&self) -> &StarSnapshot {
        &self.snapshot
    }

    pub fn star(&self, id: &StarId) -> Option<&Star> {
        self.stars.get(id)
    }

    /// Stars in insertion order.
    pub fn stars(&self) -> impl Iterator<Item = &Star> + '_ {
        self.order.iter().filter_map(|id| self.stars.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Board size, if it has been measured.
    pub fn board_size(&self) -> Option<Vec2> {
        self.board_size
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.active()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.active().is_some()
    }

    pub fn range_stats(&self) -> RangeStats {
        self.snapshot.range_stats()
    }

    /// Recompute every position from its offset. Returns true if any position changed.
    fn position_all(&mut self) -> bool {
        let size = self.board_size;
        let mut moved = false;
        for id in &self.order {
            let Some(star) = self.stars.get_mut(id) else {
                continue;
            };
            let position = size.map(|size| position_from_offset(star.offset(), size));
            if star.position() != position {
                star.set_position(position);
                moved = true;
            }
        }
        moved
    }

    /// Publish a new snapshot of the collection.
    fn commit(&mut self) {
        let stars = self
            .order
            .iter()
            .filter_map(|id| self.stars.get(id).cloned())
            .collect();
        self.snapshot = StarSnapshot::new(self.snapshot.revision().wrapping_add(1), stars);
    }
}
