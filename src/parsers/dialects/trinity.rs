//! Trinity portal, saved as `.htm`; it shows no per-message time

use crate::models::PartyLabels;
use crate::parsers::dialect::{ContentShape, Dialect, FlatLayout, ItemScope, Layout, PartyRule};

pub const TRINITY: Dialect = Dialect {
    name: "trinity",
    extension: "htm",
    parties: PartyLabels { victim: "victim", actor: "trinity" },
    chat_id: None,
    layout: Layout::Flat(FlatLayout {
        items: ItemScope::ChildrenOf { container: "div.msg_history", tag: "div" },
        party: PartyRule::FirstClass { victim: "outgoing_msg" },
        content: "p",
        timestamp: None,
        content_shape: ContentShape::Trimmed,
        content_optional: true,
    }),
};
