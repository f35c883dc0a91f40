//! Typeahead suggestions for the search form
//!
//! Keystrokes go through a per-field debounce gate; when a field has been
//! quiet long enough its query is sent to the catalog lookup, the response
//! opens that field's dropdown, and picking an entry writes it back into the
//! host form. Each field kind has its own timer, request counter, list and
//! visibility, so activity in one field never disturbs another.

mod autocomplete_render;
mod autocomplete_state;
mod commit;
mod debounce;
mod dropdown;
mod fetcher;

pub use autocomplete_render::{NO_RESULTS_TEXT, dropdown_area, dropdown_offset, render_dropdown};
pub use autocomplete_state::{AutocompleteState, FieldSuggestions, LookupOutcome};
pub use commit::HostForm;
pub use debounce::{DebounceGate, PendingLookup};
pub use dropdown::{DropdownRegions, FieldRegions, Visibility};
