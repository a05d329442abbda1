//! Hive portal: messages grouped by day, each day headed by a `div.chat-date`

use crate::models::PartyLabels;
use crate::parsers::dialect::{DayGroupLayout, Dialect, Layout, PartyRule};

pub const HIVE: Dialect = Dialect {
    name: "hive",
    extension: "html",
    parties: PartyLabels { victim: "Victim", actor: "Hive" },
    chat_id: Some("div.logout"),
    layout: Layout::DayGroups(DayGroupLayout {
        container: "div.chat-body",
        day_date: "div.chat-date",
        items: "div.chat-item",
        party: PartyRule::VictimClass("incoming"),
        content: "div.chat-message",
        time: "div.chat-message-time",
    }),
};
