//! Quote API client
//!
//! All HTTP I/O lives here, behind typed partial-result DTOs: every field
//! the server might omit or mangle deserializes to a default instead of an
//! error, so a malformed payload degrades the display rather than the app.

mod client;
pub mod types;

pub use client::{ApiClient, ApiError};
pub use types::{AnalysisReport, ThemeMember, ThemeReport};
