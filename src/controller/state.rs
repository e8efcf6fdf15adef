use crate::supplier::SupplierRecord;
use tracing::debug;

/// Everything a view needs to render the scout page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoutSnapshot {
    pub query_text: String,
    /// In the order returned by the search service
    pub results: Vec<SupplierRecord>,
    pub is_searching: bool,
    pub confirmation: Option<String>,
    /// Whether any search has been dispatched yet
    pub has_searched: bool,
}

impl ScoutSnapshot {
    /// Submit affordance state; the controller re-checks emptiness anyway
    pub fn can_submit(&self) -> bool {
        !self.is_searching && !self.query_text.trim().is_empty()
    }

    /// Preset shortcuts are an empty-state affordance only
    pub fn shows_presets(&self) -> bool {
        self.results.is_empty() && !self.is_searching
    }

    pub fn shows_no_results(&self) -> bool {
        self.has_searched && self.results.is_empty() && !self.is_searching
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Effective query was blank, nothing dispatched
    Ignored,
    Completed { count: usize },
    /// Transport, status or decode failure; logged and swallowed
    Failed,
    /// A newer search was dispatched before this one resolved
    Superseded,
    /// The controller was detached before the response arrived
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Failed,
    Cancelled,
}

/// Identifies one dispatched search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
}

/// Identifies one displayed confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationTicket(u64);

/// Interaction state and its transitions. No I/O happens here.
#[derive(Debug, Default)]
pub(crate) struct InteractionState {
    snapshot: ScoutSnapshot,
    latest_search: u64,
    confirmation_generation: u64,
    detached: bool,
}

impl InteractionState {
    pub(crate) fn snapshot(&self) -> &ScoutSnapshot {
        &self.snapshot
    }

    pub(crate) fn is_detached(&self) -> bool {
        self.detached
    }

    pub(crate) fn detach(&mut self) {
        self.detached = true;
    }

    pub(crate) fn set_query(&mut self, text: String) {
        if !self.detached {
            self.snapshot.query_text = text;
        }
    }

    /// Idle -> Searching for the current query text
    pub(crate) fn begin_search(&mut self) -> Result<SearchTicket, SearchOutcome> {
        if self.detached {
            return Err(SearchOutcome::Cancelled);
        }
        if self.snapshot.query_text.trim().is_empty() {
            return Err(SearchOutcome::Ignored);
        }

        self.latest_search += 1;
        self.snapshot.results.clear();
        self.snapshot.confirmation = None;
        self.snapshot.is_searching = true;
        self.snapshot.has_searched = true;

        debug!("Search #{} started", self.latest_search);
        Ok(SearchTicket {
            seq: self.latest_search,
            query: self.snapshot.query_text.clone(),
        })
    }

    /// Overwrites the query with the preset, then starts a search for it
    pub(crate) fn begin_preset_search(
        &mut self,
        preset: &str,
    ) -> Result<SearchTicket, SearchOutcome> {
        self.set_query(preset.to_string());
        self.begin_search()
    }

    /// Searching -> Idle. `None` means the call failed.
    pub(crate) fn finish_search(
        &mut self,
        ticket: &SearchTicket,
        response: Option<Vec<SupplierRecord>>,
    ) -> SearchOutcome {
        if self.detached {
            return SearchOutcome::Cancelled;
        }
        if ticket.seq != self.latest_search {
            debug!(
                "Search #{} superseded by #{}, dropping response",
                ticket.seq, self.latest_search
            );
            return SearchOutcome::Superseded;
        }

        self.snapshot.is_searching = false;
        match response {
            Some(results) => {
                let count = results.len();
                self.snapshot.results = results;
                SearchOutcome::Completed { count }
            }
            None => SearchOutcome::Failed,
        }
    }

    /// Shows a confirmation, replacing any previous one
    pub(crate) fn confirm(&mut self, message: String) -> Option<ConfirmationTicket> {
        if self.detached {
            return None;
        }
        self.confirmation_generation += 1;
        self.snapshot.confirmation = Some(message);
        Some(ConfirmationTicket(self.confirmation_generation))
    }

    /// Clears the confirmation only if it is still the one the ticket was issued for
    pub(crate) fn clear_confirmation(&mut self, ticket: ConfirmationTicket) -> bool {
        if self.detached || ticket.0 != self.confirmation_generation {
            return false;
        }
        self.snapshot.confirmation.take().is_some()
    }
}
