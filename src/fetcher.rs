//! Background fetch worker
//!
//! All network requests run on a dedicated worker thread so the UI thread
//! never blocks. Requests and responses flow over mpsc channels; every
//! request carries a monotonically increasing id so the app can drop
//! responses that a newer request has superseded.

mod worker;

pub use worker::{FetchRequest, FetchResponse, FetcherHandle, spawn_worker};
