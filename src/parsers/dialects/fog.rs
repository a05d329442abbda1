//! Fog portal
//!
//! Rows in one long column; centred date separators apply to every bubble that
//! follows them. Classes are matched as the exact attribute value, since the
//! bubble variants differ only by a trailing `left` / `right` token.

use crate::models::PartyLabels;
use crate::parsers::dialect::{DateSeparatedLayout, Dialect, Layout};

pub const FOG: Dialect = Dialect {
    name: "fog",
    extension: "html",
    parties: PartyLabels { victim: "victim", actor: "fog" },
    chat_id: None,
    layout: Layout::DateSeparated(DateSeparatedLayout {
        containers: &[
            "div.chat-messages",
            r#"div[class="g-box g-flex"]"#,
            r#"div[class="g-box g-flex"]"#,
        ],
        rows: r#"div[class="g-box g-flex"]"#,
        date_separator: r#"span[class="g-text g-text_variant_body-1 g-color-text g-color-text_color_secondary"]"#,
        date_style: "text-align: center",
        actor_bubble: r#"div[class="g-box g-flex g-flex_s_2 left"]"#,
        victim_bubble: r#"div[class="g-box g-flex g-flex_s_2 right"]"#,
        details: "div.g-flex__wr",
    }),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::engine::extract_chat_from_str;

    const DATE_CLASS: &str = "g-text g-text_variant_body-1 g-color-text g-color-text_color_secondary";

    fn date_row(date: &str) -> String {
        format!(
            r#"<div class="g-box g-flex"><span class="{DATE_CLASS}" style="text-align: center;">{date}</span></div>"#
        )
    }

    fn bubble_row(side: &str, text: &str, time: &str) -> String {
        format!(
            r#"<div class="g-box g-flex"><div class="g-box g-flex g-flex_s_2 {side}"><div class="g-flex__wr">{text}</div><div class="g-flex__wr">{time}</div></div></div>"#
        )
    }

    fn page(rows: &[String]) -> String {
        format!(
            r#"<html><body><div class="chat-messages"><div class="g-box g-flex"><div class="g-box g-flex">{}</div></div></div></body></html>"#,
            rows.concat()
        )
    }

    #[test]
    fn test_running_date_applies_until_next_separator() {
        let html = page(&[
            date_row("12.06.2024"),
            bubble_row("left", "Your files are encrypted", "10:00"),
            bubble_row("right", "How much?", "10:30"),
            date_row("13.06.2024"),
            bubble_row("left", "500k", "09:15"),
        ]);

        let chat = extract_chat_from_str(&FOG, &html).unwrap();

        assert_eq!(chat.len(), 3);
        assert_eq!(chat.messages[0].party, "fog");
        assert_eq!(chat.messages[0].timestamp, "12.06.2024 10:00");
        assert_eq!(chat.messages[1].party, "victim");
        assert_eq!(chat.messages[1].content, "How much?");
        assert_eq!(chat.messages[1].timestamp, "12.06.2024 10:30");
        assert_eq!(chat.messages[2].timestamp, "13.06.2024 09:15");
    }

    #[test]
    fn test_messages_before_first_date_are_dropped() {
        let html = page(&[
            bubble_row("right", "anyone?", "08:00"),
            date_row("01.07.2024"),
            bubble_row("left", "yes", "08:05"),
        ]);

        let chat = extract_chat_from_str(&FOG, &html).unwrap();
        assert_eq!(chat.len(), 1);
        assert_eq!(chat.messages[0].content, "yes");
    }

    #[test]
    fn test_blank_date_separator_unsets_date() {
        let html = page(&[
            date_row("01.07.2024"),
            bubble_row("right", "first", "07:55"),
            date_row("   "),
            bubble_row("left", "dropped", "10:00"),
            date_row("02.07.2024"),
            bubble_row("left", "kept", "10:05"),
        ]);

        let chat = extract_chat_from_str(&FOG, &html).unwrap();

        let contents: Vec<&str> = chat.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["first", "kept"]);
        assert_eq!(chat.messages[1].timestamp, "02.07.2024 10:05");
    }

    #[test]
    fn test_uncentred_span_does_not_change_date() {
        let html = page(&[
            date_row("01.07.2024"),
            format!(r#"<div class="g-box g-flex"><span class="{DATE_CLASS}">not a date</span></div>"#),
            bubble_row("left", "hi", "08:05"),
        ]);

        let chat = extract_chat_from_str(&FOG, &html).unwrap();
        assert_eq!(chat.messages[0].timestamp, "01.07.2024 08:05");
    }

    #[test]
    fn test_date_state_does_not_leak_between_files() {
        let first = page(&[date_row("01.07.2024"), bubble_row("left", "a", "08:00")]);
        let second = page(&[bubble_row("left", "b", "09:00")]);

        assert_eq!(extract_chat_from_str(&FOG, &first).unwrap().len(), 1);
        assert!(extract_chat_from_str(&FOG, &second).unwrap().is_empty());
    }

    #[test]
    fn test_missing_container_chain_fails_file() {
        let html = r#"<html><body><div class="chat-messages"></div></body></html>"#;
        assert!(extract_chat_from_str(&FOG, html).is_err());
    }
}
