//! Session domain.
//!
//! - [`context::DocumentSession`] - the per-session document slot owned by the front end
//! - [`context::LoadedDocument`] - a successfully fetched document and its source

pub mod context;

pub use context::{DocumentSession, LoadedDocument};
