//! Autocomplete state
//!
//! Owns everything the typeahead needs per field: the debounce gate, the
//! request counters used to drop stale responses, the suggestion lists and
//! their dropdown visibility, and the channel to the API worker.

use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;

use super::debounce::DebounceGate;
use super::dropdown::Visibility;
use crate::api::ApiRequest;
use crate::field::{FieldKind, FieldMap};

/// What the last lookup for a field ended with
///
/// Only used for diagnostics: a failed lookup renders the same as an empty
/// one (the dropdown simply stays closed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupOutcome {
    #[default]
    None,
    Loaded,
    Failed,
}

/// Suggestion list and dropdown state of one field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSuggestions {
    /// Suggestions in the order the backend returned them
    pub items: Vec<String>,
    pub visibility: Visibility,
    pub last_outcome: LookupOutcome,
    /// Keyboard highlight inside the open dropdown
    pub highlighted: Option<usize>,
    /// A lookup has been sent and its response not yet applied
    pub loading: bool,
}

impl FieldSuggestions {
    /// Empty the list and close the dropdown
    pub(super) fn clear(&mut self) {
        self.items.clear();
        self.visibility = Visibility::Hidden;
        self.highlighted = None;
        self.loading = false;
    }
}

pub struct AutocompleteState {
    pub(super) gate: DebounceGate,
    pub(super) fields: FieldMap<FieldSuggestions>,
    /// Latest request id issued per field
    pub(super) request_ids: FieldMap<u64>,
    pub(super) request_tx: Option<UnboundedSender<ApiRequest>>,
}

impl AutocompleteState {
    /// Create state with the given quiet interval and no worker attached
    pub fn new(debounce: Duration) -> Self {
        Self {
            gate: DebounceGate::new(debounce),
            fields: FieldMap::default(),
            request_ids: FieldMap::default(),
            request_tx: None,
        }
    }

    /// Attach the channel to the API worker
    pub fn set_request_channel(&mut self, request_tx: UnboundedSender<ApiRequest>) {
        self.request_tx = Some(request_tx);
    }

    /// Feed a keystroke for `kind` into the debounce gate
    pub fn on_input(&mut self, kind: FieldKind, query: &str, limit: usize, now: Instant) {
        self.gate.submit(kind, query, limit, now);
    }

    /// When the event loop must wake up next to fire a debounced lookup
    pub fn next_deadline(&self) -> Option<Instant> {
        self.gate.next_deadline()
    }

    pub fn field(&self, kind: FieldKind) -> &FieldSuggestions {
        &self.fields[kind]
    }

    pub fn suggestions(&self, kind: FieldKind) -> &[String] {
        &self.fields[kind].items
    }

    pub fn is_loading(&self, kind: FieldKind) -> bool {
        self.fields[kind].loading
    }

    /// Latest request id issued for `kind`
    pub fn current_request_id(&self, kind: FieldKind) -> u64 {
        self.request_ids[kind]
    }

    /// Advance the request counter so responses to earlier requests are
    /// recognised as stale
    pub(super) fn next_request_id(&mut self, kind: FieldKind) -> u64 {
        let id = &mut self.request_ids[kind];
        *id = id.wrapping_add(1);
        *id
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
