/// Options for [`StarBoard`](super::StarBoard).
#[derive(Clone, Debug)]
pub struct StarBoardOptions {
    /// If true, ending a drag writes the dropped location back into the star's offset
    /// (`offset = position - board_center`), so a later resize keeps the star where it was
    /// dropped.
    ///
    /// If false (the default), the offset is left untouched and the next resize snaps the star
    /// back to its pre-drag, offset-derived position.
    pub sync_offset_on_drop: bool,

    /// If true, keep an in-memory log of board events (see [`StarBoard::debug_log`](super::StarBoard::debug_log)).
    pub debug_event_log: bool,

    /// Maximum number of debug log lines to keep (ring buffer).
    pub debug_event_log_capacity: usize,
}

impl Default for StarBoardOptions {
    fn default() -> Self {
        Self {
            sync_offset_on_drop: false,
            debug_event_log: false,
            debug_event_log_capacity: 200,
        }
    }
}

impl StarBoardOptions {
    pub(crate) fn debug_log_capacity(&self) -> usize {
        self.debug_event_log_capacity.clamp(1, 10_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keeps_reference_drop_behavior() {
        let opt = StarBoardOptions::default();
        assert!(!opt.sync_offset_on_drop);
        assert!(!opt.debug_event_log);
    }

    #[test]
    fn debug_log_capacity_is_clamped() {
        let opt = StarBoardOptions {
            debug_event_log_capacity: 0,
            ..Default::default()
        };
        assert_eq!(opt.debug_log_capacity(), 1);
    }
}
