//! Suggestion fetching
//!
//! Turns due debounce entries into worker requests and applies the answers.
//! Lookup failures end here: they are logged and the field's dropdown closes,
//! with no retry and nothing shown to the user.

use std::time::Instant;

use super::autocomplete_state::{AutocompleteState, LookupOutcome};
use super::dropdown::Visibility;
use crate::api::{ApiError, ApiRequest};
use crate::field::FieldKind;

impl AutocompleteState {
    /// Dispatch every lookup whose quiet interval has elapsed
    ///
    /// Returns how many requests were sent to the worker.
    pub fn tick(&mut self, now: Instant) -> usize {
        self.gate
            .take_due(now)
            .into_iter()
            .filter(|lookup| self.dispatch(lookup.kind, &lookup.query, lookup.limit))
            .count()
    }

    /// Ask the worker for up to `limit` suggestions for `query`
    ///
    /// A blank query clears the field without any request. The request
    /// counter advances either way, so a response still in flight for an
    /// older query is discarded when it lands. Returns whether a request was
    /// sent.
    pub fn dispatch(&mut self, kind: FieldKind, query: &str, limit: usize) -> bool {
        let request_id = self.next_request_id(kind);
        let query = query.trim();

        if query.is_empty() {
            self.fields[kind].clear();
            return false;
        }

        let Some(tx) = &self.request_tx else {
            log::debug!("No API worker attached, skipping {} lookup", kind);
            return false;
        };

        let request = ApiRequest::Suggest {
            kind,
            query: query.to_string(),
            limit,
            request_id,
        };
        if tx.send(request).is_err() {
            log::warn!("API worker is gone, {} lookup dropped", kind);
            self.fields[kind].clear();
            self.fields[kind].last_outcome = LookupOutcome::Failed;
            return false;
        }

        self.fields[kind].loading = true;
        true
    }

    /// Apply a worker response for `kind`
    ///
    /// Responses to anything but the latest request for that field are
    /// ignored. Returns whether the response was applied.
    pub fn apply_response(
        &mut self,
        kind: FieldKind,
        request_id: u64,
        result: Result<Vec<String>, ApiError>,
    ) -> bool {
        let current = self.request_ids[kind];
        if request_id != current {
            log::debug!(
                "Discarding stale {} suggestions #{} (current: #{})",
                kind,
                request_id,
                current
            );
            return false;
        }

        let field = &mut self.fields[kind];
        match result {
            Ok(items) => {
                field.items = items;
                field.visibility = Visibility::Visible;
                field.highlighted = None;
                field.loading = false;
                field.last_outcome = LookupOutcome::Loaded;
            }
            Err(e) => {
                log::warn!("{} lookup #{} failed: {}", kind, request_id, e);
                field.clear();
                field.last_outcome = LookupOutcome::Failed;
            }
        }
        true
    }
}

#[cfg(test)]
#[path = "fetcher_tests.rs"]
mod fetcher_tests;
