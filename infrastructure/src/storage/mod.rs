//! Persistence adapters
//!
//! Provides [`JsonFileSessionStore`], which keeps the unfinished game and the
//! best score as JSON files in the data directory.

mod json_store;

pub use json_store::JsonFileSessionStore;
