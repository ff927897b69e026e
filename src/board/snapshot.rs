use std::sync::Arc;

use crate::star::{Star, StarId};
use crate::stats::{range_stats, RangeStats};

/// Immutable view of the star collection at one revision.
///
/// Cloning is cheap. The board hands out a new snapshot (with a new revision) after every
/// change, so views can tell "something changed" apart from "same data" by identity alone.
#[derive(Clone, Debug)]
pub struct StarSnapshot {
    revision: u64,
    stars: Arc<[Star]>,
}

impl Default for StarSnapshot {
    fn default() -> Self {
        Self {
            revision: 0,
            stars: Arc::from(Vec::new()),
        }
    }
}

impl StarSnapshot {
    pub(super) fn new(revision: u64, stars: Vec<Star>) -> Self {
        Self {
            revision,
            stars: Arc::from(stars),
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Stars in insertion order.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Star> {
        self.stars.iter()
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn get(&self, id: &StarId) -> Option<&Star> {
        self.stars.iter().find(|star| star.id() == id)
    }

    /// True if both snapshots are the very same publication.
    pub fn same_as(&self, other: &Self) -> bool {
        self.revision == other.revision && Arc::ptr_eq(&self.stars, &other.stars)
    }

    pub fn range_stats(&self) -> RangeStats {
        range_stats(self.stars.iter())
    }
}

impl<'a> IntoIterator for &'a StarSnapshot {
    type Item = &'a Star;
    type IntoIter = std::slice::Iter<'a, Star>;

    fn into_iter(self) -> Self::IntoIter {
        self.stars.iter()
    }
}
