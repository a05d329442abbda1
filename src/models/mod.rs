//! Data models for converted chats and the chat index.
//!
//! - [`Chat`] / [`Message`] - per-file output of the HTML dialect parsers
//! - [`Party`] / [`PartyLabels`] - speaker classification and its per-dialect labels
//! - [`ChatIndex`] - aggregate summary produced by the indexer

pub mod chat;
pub mod index;

pub use chat::{Chat, Message, Party, PartyLabels};
pub use index::{ChatIndex, ChatSummary, GroupIndex, GroupStatistics, IndexStatistics};
