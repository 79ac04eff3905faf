//! Published portfolio state - the atomically replaced snapshot and its store.

mod snapshot_model;
mod snapshot_store;

pub use snapshot_model::*;
pub use snapshot_store::*;
