//! Black Basta portal: bubbles carry a "You," / "Basta Group," name line

use crate::models::PartyLabels;
use crate::parsers::dialect::{ContentShape, Dialect, FlatLayout, ItemScope, Layout, PartyRule};

pub const BLACK_BASTA: Dialect = Dialect {
    name: "blackbasta",
    extension: "html",
    parties: PartyLabels { victim: "Victim", actor: "Black Basta" },
    chat_id: None,
    layout: Layout::Flat(FlatLayout {
        items: ItemScope::Matching("div.msg-data-container"),
        party: PartyRule::NameMarker { field: "div.name", victim: "You,", actor: "Basta Group," },
        content: "div.text",
        timestamp: Some("div.message_time"),
        content_shape: ContentShape::Trimmed,
        content_optional: false,
    }),
};
