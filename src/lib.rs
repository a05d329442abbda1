//! Ransomchats - normalize leaked ransomware negotiation chats and index them
//!
//! This library converts the HTML chat pages saved from six extortion groups'
//! negotiation portals into one JSON shape, and summarizes the published JSON
//! corpus. It supports:
//!
//! - Converting Black Basta, Fog, Hive, LockBit 3.0, MountLocker and Trinity exports
//! - Describing each portal's markup as a declarative [`parsers::Dialect`]
//! - Counting messages per chat across a repository of JSON chats
//! - Writing the aggregate `chat_index.json`
//!
//! # Example
//!
//! ```no_run
//! use ransomchats::parsers::{convert_directory, dialects::LOCKBIT};
//! use std::path::Path;
//!
//! let report = convert_directory(&LOCKBIT, Path::new("html/lockbit"), Path::new("lockbit3.0"))?;
//! println!("Converted {} chats", report.files_converted);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod index_storage;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use indexer::{build_chat_index, generate_chat_index};
pub use models::{Chat, ChatIndex, Message};
pub use parsers::{convert_directory, extract_chat_from_str};
