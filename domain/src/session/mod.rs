//! Game session domain.
//!
//! - [`entities::Session`]: the state machine for one game
//! - [`snapshot::SessionSnapshot`]: the plain-data shape used for save/resume
//! - [`value_objects`]: answer outcomes, lifecycle state and the
//!   [`Unavailable`](value_objects::Unavailable) signal

pub mod entities;
pub mod snapshot;
pub mod value_objects;
