//! Search & save interaction controller.
//!
//! Owns the query text, result list, in-flight flag and save confirmation,
//! and is the only thing that mutates them. Views read [`ScoutSnapshot`]s
//! and call back into the controller; they never touch state directly.

pub mod presets;
pub mod state;

pub use presets::PresetShortcuts;
pub use state::{SaveOutcome, ScoutSnapshot, SearchOutcome};

use crate::scout_api::SupplierApi;
use crate::supplier::SupplierRecord;
use state::{ConfirmationTicket, InteractionState};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// How long a save confirmation stays visible
pub const CONFIRMATION_TTL: Duration = Duration::from_millis(3000);

struct Shared {
    state: Mutex<InteractionState>,
    updates: watch::Sender<ScoutSnapshot>,
}

impl Shared {
    /// Apply a transition and publish the resulting snapshot if it changed
    fn update<R>(&self, f: impl FnOnce(&mut InteractionState) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let result = f(&mut state);

        // Publish under the lock so subscribers never see snapshots out of order
        let snapshot = state.snapshot();
        self.updates.send_if_modified(|current| {
            if current != snapshot {
                *current = snapshot.clone();
                true
            } else {
                false
            }
        });
        result
    }

    fn read<R>(&self, f: impl FnOnce(&InteractionState) -> R) -> R {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }
}

/// Cloning is cheap and all clones drive the same state
#[derive(Clone)]
pub struct ScoutController {
    api: Arc<dyn SupplierApi>,
    presets: PresetShortcuts,
    shared: Arc<Shared>,
}

impl PartialEq for ScoutController {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl ScoutController {
    pub fn new(api: Arc<dyn SupplierApi>, presets: PresetShortcuts) -> Self {
        let (updates, _) = watch::channel(ScoutSnapshot::default());
        Self {
            api,
            presets,
            shared: Arc::new(Shared {
                state: Mutex::new(InteractionState::default()),
                updates,
            }),
        }
    }

    pub fn api(&self) -> Arc<dyn SupplierApi> {
        self.api.clone()
    }

    pub fn presets(&self) -> &PresetShortcuts {
        &self.presets
    }

    /// Current state
    pub fn snapshot(&self) -> ScoutSnapshot {
        self.shared.read(|state| state.snapshot().clone())
    }

    /// Receive every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<ScoutSnapshot> {
        self.shared.updates.subscribe()
    }

    pub fn is_detached(&self) -> bool {
        self.shared.read(InteractionState::is_detached)
    }

    /// Mirror of the query input field
    pub fn set_query(&self, text: impl Into<String>) {
        let text = text.into();
        self.shared.update(|state| state.set_query(text));
    }

    /// Form submission: search for the current query text
    pub async fn submit(&self) -> SearchOutcome {
        let ticket = self.shared.update(InteractionState::begin_search);
        self.run_search(ticket).await
    }

    /// Same as typing `preset` into the query field and submitting
    pub async fn select_preset(&self, preset: &str) -> SearchOutcome {
        debug!("Preset selected: '{}'", preset);
        let ticket = self
            .shared
            .update(|state| state.begin_preset_search(preset));
        self.run_search(ticket).await
    }

    async fn run_search(
        &self,
        ticket: Result<state::SearchTicket, SearchOutcome>,
    ) -> SearchOutcome {
        let ticket = match ticket {
            Ok(ticket) => ticket,
            Err(outcome) => {
                debug!("Search not dispatched: {:?}", outcome);
                return outcome;
            }
        };

        info!("🔍 Search #{}: '{}'", ticket.seq, ticket.query);

        let response = match self.api.search(&ticket.query).await {
            Ok(results) => Some(results),
            Err(e) => {
                warn!("✗ Search #{} failed: {}", ticket.seq, e);
                None
            }
        };

        let outcome = self
            .shared
            .update(|state| state.finish_search(&ticket, response));

        match outcome {
            SearchOutcome::Completed { count } => {
                info!("✓ Search #{} returned {} supplier(s)", ticket.seq, count)
            }
            SearchOutcome::Superseded => {
                debug!("Search #{} resolved after a newer search", ticket.seq)
            }
            SearchOutcome::Cancelled => {
                debug!("Search #{} resolved after teardown", ticket.seq)
            }
            SearchOutcome::Failed | SearchOutcome::Ignored => {}
        }
        outcome
    }

    /// Persist one displayed record and confirm on success.
    ///
    /// Saves are independent of each other and of any search in flight.
    pub async fn save(&self, supplier: SupplierRecord) -> SaveOutcome {
        if self.is_detached() {
            return SaveOutcome::Cancelled;
        }

        info!("💾 Saving supplier '{}'", supplier.name);

        if let Err(e) = self.api.save(&supplier).await {
            warn!("✗ Save of '{}' failed: {}", supplier.name, e);
            return SaveOutcome::Failed;
        }

        let message = supplier.saved_message();
        match self.shared.update(|state| state.confirm(message)) {
            Some(ticket) => {
                info!("✓ Saved supplier '{}'", supplier.name);
                schedule_clear(Arc::downgrade(&self.shared), ticket);
                SaveOutcome::Saved
            }
            None => SaveOutcome::Cancelled,
        }
    }

    /// Tear down: responses and timers that arrive later are discarded
    pub fn detach(&self) {
        info!("Scout controller detached");
        self.shared.update(InteractionState::detach);
    }
}

fn schedule_clear(shared: Weak<Shared>, ticket: ConfirmationTicket) {
    let deadline = tokio::time::Instant::now() + CONFIRMATION_TTL;
    tokio::spawn(async move {
        tokio::time::sleep_until(deadline).await;
        if let Some(shared) = shared.upgrade() {
            if shared.update(|state| state.clear_confirmation(ticket)) {
                debug!("Save confirmation cleared");
            }
        }
    });
}
