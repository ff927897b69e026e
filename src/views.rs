//! View models for the board's components and the memo policies they ship with.

use ahash::{AHashMap, AHashSet};

use crate::board::StarSnapshot;
use crate::memo::{FnComparison, MemoView, PartialEqProps, PropsComparison};
use crate::star::{Star, StarId};
use crate::stats::RangeStats;

/// Comparison signature used by the info panel policies.
pub type SnapshotComparison = FnComparison<fn(&StarSnapshot, &StarSnapshot) -> bool>;

/// Memoized info panel.
pub type InfoPanelView = MemoView<StarSnapshot, InfoPanel, SnapshotComparison>;

/// Summary panel: star count and age range.
#[derive(Clone, Debug, PartialEq)]
pub struct InfoPanel {
    pub stats: RangeStats,
}

impl InfoPanel {
    pub fn from_snapshot(snapshot: &StarSnapshot) -> Self {
        Self {
            stats: snapshot.range_stats(),
        }
    }

    pub fn lines(&self) -> [String; 3] {
        [
            format!("You have {} stars!", self.stats.count),
            format!("Age of the oldest star: {}", self.stats.max_age),
            format!("Age of the youngest star: {}", self.stats.min_age),
        ]
    }
}

/// Props are "unchanged" while the star count stays the same.
///
/// Dragging a star therefore never re-evaluates the panel. Note that this also skips changes
/// that keep the count but alter ages (e.g. delete one star then add another before the panel
/// is shown again).
pub fn star_count_unchanged(prev: &StarSnapshot, next: &StarSnapshot) -> bool {
    prev.len() == next.len()
}

/// Props are "unchanged" only for the very same snapshot publication.
pub fn snapshot_unchanged(prev: &StarSnapshot, next: &StarSnapshot) -> bool {
    prev.same_as(next)
}

/// Info panel that only re-evaluates when the number of stars changes.
pub fn info_panel_by_count() -> InfoPanelView {
    MemoView::new(FnComparison::new(
        star_count_unchanged as fn(&StarSnapshot, &StarSnapshot) -> bool,
    ))
}

/// Info panel that re-evaluates on every newly published snapshot.
pub fn info_panel_by_snapshot() -> InfoPanelView {
    MemoView::new(FnComparison::new(
        snapshot_unchanged as fn(&StarSnapshot, &StarSnapshot) -> bool,
    ))
}

/// Show the info panel for `snapshot` through `view`.
pub fn show_info_panel<'v>(
    view: &'v mut InfoPanelView,
    snapshot: &StarSnapshot,
) -> &'v InfoPanel {
    view.show(snapshot.clone(), InfoPanel::from_snapshot)
}

/// One draggable star icon.
#[derive(Clone, Debug, PartialEq)]
pub struct StarTile {
    pub id: StarId,
    pub label: String,
    pub left: f32,
    pub top: f32,
}

impl StarTile {
    /// `None` while the star has no position yet (board not measured).
    pub fn from_star(star: &Star) -> Option<Self> {
        let position = star.position()?;
        Some(Self {
            id: star.id().clone(),
            label: format!("⭐{}", star.age()),
            left: position.x,
            top: position.y,
        })
    }
}

/// One memoized [`StarTile`] per star, all sharing the same policy.
#[derive(Debug)]
pub struct StarTiles<C = PartialEqProps> {
    policy: C,
    views: AHashMap<StarId, MemoView<Star, Option<StarTile>, C>>,
    order: Vec<StarId>,
}

impl<C: Default> Default for StarTiles<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C> StarTiles<C> {
    pub fn new(policy: C) -> Self {
        Self {
            policy,
            views: AHashMap::new(),
            order: Vec::new(),
        }
    }

    /// Total evaluations across all tiles currently alive.
    pub fn render_count(&self) -> u64 {
        self.order
            .iter()
            .filter_map(|id| self.views.get(id))
            .map(MemoView::render_count)
            .sum()
    }

    /// Tiles of the last [`Self::update`], in snapshot order, skipping unpositioned stars.
    pub fn tiles(&self) -> impl Iterator<Item = &StarTile> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.views.get(id)?.last_output()?.as_ref())
    }
}

impl<C: PropsComparison<Star> + Clone> StarTiles<C> {
    /// Bring the tiles in line with `snapshot`. Returns how many tiles were re-evaluated.
    pub fn update(&mut self, snapshot: &StarSnapshot) -> usize {
        let live: AHashSet<&StarId> = snapshot.iter().map(Star::id).collect();
        self.views.retain(|id, _| live.contains(id));
        self.order = snapshot.iter().map(|star| star.id().clone()).collect();

        let mut evaluated = 0;
        for star in snapshot {
            let policy = &self.policy;
            let view = self
                .views
                .entry(star.id().clone())
                .or_insert_with(|| MemoView::new(policy.clone()));
            if view.update(star.clone(), StarTile::from_star) {
                evaluated += 1;
            }
        }
        evaluated
    }
}

/// The add-star button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewStarButton {
    pub label: &'static str,
}

impl Default for NewStarButton {
    fn default() -> Self {
        Self { label: "⭐" }
    }
}

/// The button takes no props, so a pure policy renders it exactly once.
pub fn new_star_button_view() -> MemoView<(), NewStarButton, PartialEqProps> {
    MemoView::default()
}
