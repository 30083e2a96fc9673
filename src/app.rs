pub mod app_events;
pub mod app_render;
mod state;

pub use state::{App, Focus};


#[cfg(test)]
#[path = "app/app_events_tests.rs"]
mod app_events_tests;
