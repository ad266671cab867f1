use crate::models::{InterpretationResult, SearchFilters};
use tracing::debug;

/// Identifies one interpretation request within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// Session-scoped search state.
///
/// Overlapping interpretations may resolve out of order; only the result for
/// the most recently issued ticket is merged, older ones are discarded.
#[derive(Debug, Default)]
pub struct SearchSession {
    query: String,
    filters: SearchFilters,
    latest: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    /// Register a new query and return its ticket
    pub fn begin(&mut self, query: &str) -> SearchTicket {
        self.latest += 1;
        self.query = query.to_string();
        SearchTicket(self.latest)
    }

    /// Merge `result` into the current filters if `ticket` is still the
    /// latest. Returns whether the result was applied.
    pub fn apply(&mut self, ticket: SearchTicket, result: InterpretationResult) -> bool {
        if ticket.0 != self.latest {
            debug!(
                "Discarding stale interpretation (ticket {}, latest {})",
                ticket.0, self.latest
            );
            return false;
        }
        self.filters.merge(result.filters);
        true
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.filters = SearchFilters::default();
    }
}
