//! One traversal engine shared by every dialect descriptor
//!
//! Structural problems with the whole document (a missing container) fail the
//! file. Problems with a single message element are logged and that element is
//! skipped, so one odd bubble never costs the rest of the chat.

use anyhow::{Result, bail};
use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use super::dialect::{DateSeparatedLayout, DayGroupLayout, Dialect, FlatLayout, ItemScope, Layout};
use super::html;
use crate::models::{Chat, Message, Party};

/// Extract the chat described by `dialect` from a parsed document
pub fn extract_chat(dialect: &Dialect, document: &Html) -> Result<Chat> {
    let root = document.root_element();

    let chat_id = match dialect.chat_id {
        Some(css) => html::find(root, css)?.map(html::text_of).unwrap_or_default(),
        None => String::new(),
    };
    let mut chat = Chat::new(chat_id);

    match &dialect.layout {
        Layout::Flat(layout) => walk_flat(dialect, layout, root, &mut chat.messages)?,
        Layout::DayGroups(layout) => walk_day_groups(dialect, layout, root, &mut chat.messages)?,
        Layout::DateSeparated(layout) => {
            walk_date_separated(dialect, layout, root, &mut chat.messages)?
        }
    }

    Ok(chat)
}

/// Parse `source` as a full HTML document and extract its chat
pub fn extract_chat_from_str(dialect: &Dialect, source: &str) -> Result<Chat> {
    let document = Html::parse_document(source);
    extract_chat(dialect, &document)
}

fn message(dialect: &Dialect, party: Party, content: String, timestamp: String) -> Message {
    Message { party: dialect.parties.label(party).to_string(), content, timestamp }
}

fn walk_flat(
    dialect: &Dialect,
    layout: &FlatLayout,
    root: ElementRef<'_>,
    out: &mut Vec<Message>,
) -> Result<()> {
    let items = match layout.items {
        ItemScope::Matching(css) => html::find_all(root, css)?,
        ItemScope::ChildrenOf { container, tag } => {
            let container = html::require(root, container)?;
            html::child_elements(container, tag)
        }
    };

    for (position, item) in items.into_iter().enumerate() {
        match flat_message(dialect, layout, item) {
            Ok(Some(message)) => out.push(message),
            Ok(None) => debug!("{}: element {} is not a message", dialect.name, position + 1),
            Err(e) => warn!("{}: skipping message element {}: {:#}", dialect.name, position + 1, e),
        }
    }

    Ok(())
}

fn flat_message(
    dialect: &Dialect,
    layout: &FlatLayout,
    item: ElementRef<'_>,
) -> Result<Option<Message>> {
    let Some(party) = layout.party.resolve(item)? else {
        return Ok(None);
    };

    let content = match html::find(item, layout.content)? {
        Some(element) => layout.content_shape.apply(html::text_of(element)),
        None if layout.content_optional => return Ok(None),
        None => bail!("Missing element '{}'", layout.content),
    };

    let timestamp = match layout.timestamp {
        Some(css) => html::text_of(html::require(item, css)?),
        None => String::new(),
    };

    Ok(Some(message(dialect, party, content, timestamp)))
}

fn walk_day_groups(
    dialect: &Dialect,
    layout: &DayGroupLayout,
    root: ElementRef<'_>,
    out: &mut Vec<Message>,
) -> Result<()> {
    let container = html::require(root, layout.container)?;
    let mut seen_days = Vec::new();

    for heading in html::find_all(container, layout.day_date)? {
        let Some(day) = heading.parent().and_then(ElementRef::wrap) else {
            continue;
        };
        // Two headings under one parent would otherwise emit that day twice
        if seen_days.contains(&day.id()) {
            continue;
        }
        seen_days.push(day.id());

        let date = html::text_of(heading);
        for (position, item) in html::find_all(day, layout.items)?.into_iter().enumerate() {
            match day_message(dialect, layout, &date, item) {
                Ok(Some(message)) => out.push(message),
                Ok(None) => {}
                Err(e) => warn!(
                    "{}: skipping message {} of {}: {:#}",
                    dialect.name,
                    position + 1,
                    date,
                    e
                ),
            }
        }
    }

    Ok(())
}

fn day_message(
    dialect: &Dialect,
    layout: &DayGroupLayout,
    date: &str,
    item: ElementRef<'_>,
) -> Result<Option<Message>> {
    let Some(party) = layout.party.resolve(item)? else {
        return Ok(None);
    };
    let content = html::text_of(html::require(item, layout.content)?);
    let time = html::text_of(html::require(item, layout.time)?);

    Ok(Some(message(dialect, party, content, format!("{} {}", date, time))))
}

fn walk_date_separated(
    dialect: &Dialect,
    layout: &DateSeparatedLayout,
    root: ElementRef<'_>,
    out: &mut Vec<Message>,
) -> Result<()> {
    let mut scope = root;
    for css in layout.containers {
        scope = html::require(scope, css)?;
    }

    // Carried from row to row until the next separator; never outlives this file
    let mut current_date: Option<String> = None;

    for row in html::find_all(scope, layout.rows)? {
        if let Some(separator) = html::find(row, layout.date_separator)?
            && separator.value().attr("style").unwrap_or_default().contains(layout.date_style)
        {
            // A blank separator unsets the date
            let date = html::text_of(separator);
            current_date = (!date.is_empty()).then_some(date);
        }

        let (bubble, party) = if let Some(bubble) = html::find(row, layout.actor_bubble)? {
            (bubble, Party::Actor)
        } else if let Some(bubble) = html::find(row, layout.victim_bubble)? {
            (bubble, Party::Victim)
        } else {
            continue;
        };

        let details = html::find_all(bubble, layout.details)?;
        let [content, time, ..] = details.as_slice() else {
            debug!("{}: bubble without content and time", dialect.name);
            continue;
        };
        let Some(date) = current_date.as_deref() else {
            warn!("{}: dropping message with no current date", dialect.name);
            continue;
        };

        let timestamp = format!("{} {}", date, html::text_of(*time));
        out.push(message(dialect, party, html::text_of(*content), timestamp));
    }

    Ok(())
}
