//! MountLocker portal: Bootstrap alerts, green for the victim and blue for the actor

use crate::models::PartyLabels;
use crate::parsers::dialect::{ContentShape, Dialect, FlatLayout, ItemScope, Layout, PartyRule};

pub const MOUNTLOCKER: Dialect = Dialect {
    name: "mountlocker",
    extension: "html",
    parties: PartyLabels { victim: "Victim", actor: "MountLocker" },
    chat_id: None,
    layout: Layout::Flat(FlatLayout {
        items: ItemScope::Matching("div.alert"),
        party: PartyRule::ClassToken { victim: "alert-success", actor: "alert-info" },
        content: "div.chat_message",
        timestamp: Some("strong.float-right"),
        content_shape: ContentShape::Trimmed,
        content_optional: false,
    }),
};
