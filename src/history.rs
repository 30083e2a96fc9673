pub mod history_render;
mod matcher;
mod state;
pub mod storage;

pub use state::{HistoryState, MAX_HISTORY_RECORDS, SearchRecord};
