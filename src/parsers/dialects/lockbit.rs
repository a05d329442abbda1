//! LockBit 3.0 portal
//!
//! The `div.text` block repeats the send time and read state on its last two
//! lines, so those are cut from the content.

use crate::models::PartyLabels;
use crate::parsers::dialect::{ContentShape, Dialect, FlatLayout, ItemScope, Layout, PartyRule};

pub const LOCKBIT: Dialect = Dialect {
    name: "lockbit",
    extension: "html",
    parties: PartyLabels { victim: "Victim", actor: "LockBit 3.0" },
    chat_id: Some("h3"),
    layout: Layout::Flat(FlatLayout {
        items: ItemScope::Matching("div.chat-item"),
        party: PartyRule::ClassToken { victim: "chat-item-income", actor: "chat-item-out" },
        content: "div.text",
        timestamp: Some("div.date"),
        content_shape: ContentShape::DropTrailingLines(2),
        content_optional: false,
    }),
};
