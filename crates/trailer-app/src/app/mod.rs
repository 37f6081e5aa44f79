//! Application use cases

pub mod sync_service;

pub use sync_service::{sync_trailers, ProgressCallback, SyncEvent, SyncOptions, SyncOutcome, SyncReport};
