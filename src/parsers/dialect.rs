//! Declarative descriptors for the chat portal markup dialects
//!
//! Each portal is described as data: where its messages live, how the speaking
//! party is told apart, and which sub-elements carry content and time. The
//! traversal itself lives in [`crate::parsers::engine`].

use anyhow::Result;
use scraper::ElementRef;

use super::html;
use crate::models::{Party, PartyLabels};

#[derive(Debug)]
pub struct Dialect {
    /// Subcommand and log name
    pub name: &'static str,
    /// File extension of the exports, without the dot
    pub extension: &'static str,
    pub parties: PartyLabels,
    /// Element whose text is the chat id; chats without one get an empty id
    pub chat_id: Option<&'static str>,
    pub layout: Layout,
}

#[derive(Debug)]
pub enum Layout {
    Flat(FlatLayout),
    DayGroups(DayGroupLayout),
    DateSeparated(DateSeparatedLayout),
}

/// Every message is its own element with content and time inside it
#[derive(Debug)]
pub struct FlatLayout {
    pub items: ItemScope,
    pub party: PartyRule,
    pub content: &'static str,
    pub timestamp: Option<&'static str>,
    pub content_shape: ContentShape,
    /// Items without a content element are layout filler rather than broken messages
    pub content_optional: bool,
}

#[derive(Debug)]
pub enum ItemScope {
    /// Every element in the document matching the selector
    Matching(&'static str),
    /// Direct children with `tag` of the first element matching `container`
    ChildrenOf { container: &'static str, tag: &'static str },
}

/// Messages are grouped under a per-day date heading
#[derive(Debug)]
pub struct DayGroupLayout {
    pub container: &'static str,
    /// Date heading; its parent element holds that day's messages
    pub day_date: &'static str,
    pub items: &'static str,
    pub party: PartyRule,
    pub content: &'static str,
    pub time: &'static str,
}

/// A flat run of rows where date separators and message bubbles interleave
#[derive(Debug)]
pub struct DateSeparatedLayout {
    /// Nested chain, each looked up inside the previous one
    pub containers: &'static [&'static str],
    pub rows: &'static str,
    pub date_separator: &'static str,
    /// Substring of the separator's `style` attribute that marks a real date
    pub date_style: &'static str,
    pub actor_bubble: &'static str,
    pub victim_bubble: &'static str,
    /// First match is the content, second the time of day
    pub details: &'static str,
}

#[derive(Debug)]
pub enum ContentShape {
    Trimmed,
    /// Drop the last `n` lines and join the rest with single spaces
    DropTrailingLines(usize),
}

#[derive(Debug)]
pub enum PartyRule {
    /// A class token on the item picks the side; neither means unknown
    ClassToken { victim: &'static str, actor: &'static str },
    /// Victim when the item carries the token, actor otherwise
    VictimClass(&'static str),
    /// Victim when the first class matches, actor for any other class
    FirstClass { victim: &'static str },
    /// A marker substring inside a sub-element's text
    NameMarker { field: &'static str, victim: &'static str, actor: &'static str },
}

impl PartyRule {
    /// `Ok(None)` when the element belongs to neither side
    pub fn resolve(&self, item: ElementRef<'_>) -> Result<Option<Party>> {
        let party = match self {
            Self::ClassToken { victim, actor } => {
                if html::has_class(item, victim) {
                    Some(Party::Victim)
                } else if html::has_class(item, actor) {
                    Some(Party::Actor)
                } else {
                    None
                }
            }
            Self::VictimClass(victim) => {
                if html::has_class(item, victim) {
                    Some(Party::Victim)
                } else {
                    Some(Party::Actor)
                }
            }
            Self::FirstClass { victim } => match html::first_class(item) {
                Some(class) if class == *victim => Some(Party::Victim),
                Some(_) => Some(Party::Actor),
                None => None,
            },
            Self::NameMarker { field, victim, actor } => {
                let name = html::text_of(html::require(item, field)?);
                if name.contains(*victim) {
                    Some(Party::Victim)
                } else if name.contains(*actor) {
                    Some(Party::Actor)
                } else {
                    None
                }
            }
        };
        Ok(party)
    }
}

impl ContentShape {
    pub fn apply(&self, text: String) -> String {
        match self {
            Self::Trimmed => text,
            Self::DropTrailingLines(n) => {
                let lines: Vec<&str> = text.split('\n').collect();
                let keep = lines.len().saturating_sub(*n);
                lines[..keep].join(" ")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    fn first_div(doc: &Html) -> ElementRef<'_> {
        html::find(doc.root_element(), "div").unwrap().unwrap()
    }

    #[test]
    fn test_class_token_rule() {
        let rule = PartyRule::ClassToken { victim: "alert-success", actor: "alert-info" };

        let doc = Html::parse_fragment(r#"<div class="alert alert-info"></div>"#);
        assert_eq!(rule.resolve(first_div(&doc)).unwrap(), Some(Party::Actor));

        let doc = Html::parse_fragment(r#"<div class="alert alert-warning"></div>"#);
        assert_eq!(rule.resolve(first_div(&doc)).unwrap(), None);
    }

    #[test]
    fn test_victim_class_rule_defaults_to_actor() {
        let rule = PartyRule::VictimClass("incoming");
        let doc = Html::parse_fragment(r#"<div class="chat-item"></div>"#);
        assert_eq!(rule.resolve(first_div(&doc)).unwrap(), Some(Party::Actor));
    }

    #[test]
    fn test_first_class_rule_needs_a_class() {
        let rule = PartyRule::FirstClass { victim: "outgoing_msg" };
        let doc = Html::parse_fragment("<div></div>");
        assert_eq!(rule.resolve(first_div(&doc)).unwrap(), None);
    }

    #[test]
    fn test_name_marker_rule_missing_field_is_error() {
        let rule =
            PartyRule::NameMarker { field: "div.name", victim: "You,", actor: "Basta Group," };
        let doc = Html::parse_fragment(r#"<div class="msg"><div class="text">hi</div></div>"#);
        assert!(rule.resolve(first_div(&doc)).is_err());
    }

    #[test]
    fn test_drop_trailing_lines() {
        let shape = ContentShape::DropTrailingLines(2);
        assert_eq!(shape.apply("line one\nline two\n12:00\nread".to_string()), "line one line two");
        assert_eq!(shape.apply("only\none".to_string()), "");
        assert_eq!(shape.apply("single".to_string()), "");
    }
}
