//! State for a board of draggable stars, with age-range statistics and memoized view models.
//!
//! [`StarBoard`] owns the stars and publishes an immutable [`StarSnapshot`] after every change.
//! [`MemoView`] caches a derived view and decides through a [`PropsComparison`] policy whether
//! new props need a re-evaluation.

#![forbid(unsafe_code)]

pub mod board;
pub mod data;
pub mod memo;
pub mod star;
pub mod stats;
pub mod views;

pub use board::{BoardInput, BoardResponse, DragSession, StarBoard, StarBoardOptions, StarSnapshot};
pub use data::StarRecord;
pub use memo::{AlwaysRender, FnComparison, MemoView, PartialEqProps, PropsComparison};
pub use star::{Star, StarAge, StarId};
pub use stats::{range_stats, RangeStats, EMPTY_MAX_AGE, EMPTY_MIN_AGE};
pub use views::{
    info_panel_by_count, info_panel_by_snapshot, new_star_button_view, show_info_panel,
    InfoPanel, InfoPanelView, NewStarButton, StarTile, StarTiles,
};

#[cfg(feature = "serde")]
pub use data::{parse_records, DataError};
