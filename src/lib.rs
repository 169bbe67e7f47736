//! Library crate for usrdir-manager.
//!
//! This crate exposes the building blocks of the TUI:
//! - Application state and update loop (`app`)
//! - Persisted cache slot (`cache`)
//! - Error types (`error`)
//! - Remote user resource client (`remote`)
//! - In-memory search helpers (`search`)
//! - The user store reconciling cache, remote, and memory (`store`)
//! - UI rendering and widgets (`ui`)
//! - Record types and validation (`user`, `validate`)
//!
//! It is used by the `usrdir-manager` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod app;
pub mod cache;
pub mod error;
pub mod remote;
pub mod search;
pub mod store;
pub mod ui;
pub mod user;
pub mod validate;

// Re-export commonly used items at the crate root for convenience
pub use cache::CacheSlot;
pub use error::{CacheError, RemoteError, StoreError, ValidationError};
pub use remote::{HttpDirectory, RemoteDirectory};
pub use store::UserStore;
pub use user::{User, UserDraft};
pub use validate::validate;
