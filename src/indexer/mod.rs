//! Index building over the published chat corpus
//!
//! The builder walks a [`RepositorySource`] (the GitHub contents API, or a local
//! checkout), counts the messages in every group's JSON chats, and produces a
//! [`ChatIndex`](crate::models::ChatIndex). See [`builder`] for the error policy.

pub mod builder;
pub mod config;
pub mod counting;
pub mod github;
pub mod local;
pub mod source;

pub use builder::{build_chat_index, generate_chat_index};
pub use config::IndexConfig;
pub use counting::count_messages;
pub use github::GitHubRepository;
pub use local::LocalRepository;
pub use source::{EntryKind, RepoEntry, RepositorySource};
