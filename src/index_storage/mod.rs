//! Persisted `chat_index.json`
//!
//! The index is rebuilt from scratch on every run; [`save_index`] replaces the
//! previous file in one rename so readers never see a half-written index.

pub mod persistence;

pub use persistence::{load_index, save_index};
