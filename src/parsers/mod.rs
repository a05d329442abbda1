//! HTML parsers for the extortion groups' negotiation portals
//!
//! # Error Handling Strategy
//!
//! Every dialect follows the same **catch, log, continue** policy:
//!
//! - **File-level failures**: unreadable or non-UTF-8 files, a missing chat
//!   container, or a failed write are logged and the file is skipped. No JSON is
//!   written for it and the batch moves on.
//!
//! - **Element-level failures**: a message element missing its content or time is
//!   logged and dropped; the rest of the chat is still written.
//!
//! - **Unknown speakers**: elements that match neither party are not messages and
//!   are left out silently.
//!
//! Only failing to list the input directory (or create the output directory)
//! aborts a run, since there is no batch to process.

pub mod convert;
pub mod dialect;
pub mod dialects;
pub mod engine;
pub mod html;

pub use convert::{ConversionReport, ConvertedFile, convert_directory, convert_file};
pub use dialect::Dialect;
pub use engine::{extract_chat, extract_chat_from_str};
