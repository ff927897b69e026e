use itertools::Itertools as _;

use super::StarBoard;
use crate::star::StarId;

/// Short, human readable list of ids for log lines.
pub(super) fn summarize_ids<'a>(ids: impl IntoIterator<Item = &'a StarId>, max: usize) -> String {
    let mut ids = ids.into_iter();
    let head = ids.by_ref().take(max).join(",");
    let rest = ids.count();
    if rest == 0 {
        format!("[{head}]")
    } else {
        format!("[{head},… +{rest}]")
    }
}

impl StarBoard {
    pub(super) fn debug_log_event(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("{message}");
        if !self.options.debug_event_log {
            return;
        }
        self.push_debug_log_line(message);
    }

    fn push_debug_log_line(&mut self, message: String) {
        let cap = self.options.debug_log_capacity();
        while self.debug_log.len() >= cap {
            self.debug_log.pop_front();
        }
        self.debug_log
            .push_back(format!("[rev {}] {}", self.snapshot.revision(), message));
    }

    /// Lines recorded while [`StarBoardOptions::debug_event_log`](super::StarBoardOptions::debug_event_log)
    /// is enabled, oldest first.
    pub fn debug_log(&self) -> impl Iterator<Item = &str> + '_ {
        self.debug_log.iter().map(String::as_str)
    }

    pub fn clear_debug_log(&mut self) {
        self.debug_log.clear();
    }
}
