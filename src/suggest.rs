//! Stock search autocomplete
//!
//! The debounced suggestion flow: candidates arrive from the quote API (or
//! the offline fallback catalog), get ranked by match strength, and render
//! as a popup under the input field with keyboard selection.

pub mod catalog;
pub mod ranker;
pub mod suggest_render;
mod suggestion;

mod state;

pub use state::SuggestState;
pub use suggestion::Suggestion;
