//! Full-screen analysis overlay
//!
//! Opens when a search is committed: shows a loading state, then the
//! analysis report (or theme aggregate), or an inline error panel with a
//! retry affordance. Never auto-retries.

pub mod analysis_render;
mod state;

pub use state::{AnalysisState, AnalysisSubject, AnalysisView};
