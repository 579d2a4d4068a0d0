//! Poll cursor: the next expected update id.

/// Held in memory only. After a restart the first fetch omits the offset, so updates that
/// arrived before the previous run's last acknowledgement may be delivered again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollCursor {
    next: Option<i64>,
}

impl PollCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset for the next fetch; `None` until the first update has been seen.
    pub fn offset(&self) -> Option<i64> {
        self.next
    }

    /// True for ids below the cursor, which were already handled in this run.
    pub fn is_seen(&self, id: i64) -> bool {
        self.next.is_some_and(|next| id < next)
    }

    /// Moves the cursor past the highest id in `ids`. Never moves backwards.
    pub fn advance(&mut self, ids: impl IntoIterator<Item = i64>) {
        if let Some(max) = ids.into_iter().max() {
            let candidate = max.saturating_add(1);
            self.next = Some(self.next.map_or(candidate, |next| next.max(candidate)));
        }
    }
}
