//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Builder for a directory of saved chat pages
pub struct HtmlDirBuilder {
    temp_dir: TempDir,
}

impl HtmlDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a file with the given name and content
    pub fn with_file(self, name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(name), content).expect("Failed to write page");
        self
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for HtmlDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a local checkout of the chat corpus repository
pub struct CorpusBuilder {
    temp_dir: TempDir,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a group directory with `(filename, body)` files
    pub fn with_group(self, group: &str, files: &[(&str, &str)]) -> Self {
        let dir = self.temp_dir.path().join(group);
        fs::create_dir_all(&dir).expect("Failed to create group dir");
        for (name, body) in files {
            fs::write(dir.join(name), body).expect("Failed to write chat file");
        }
        self
    }

    /// Add a file at the repository root
    pub fn with_root_file(self, name: &str, body: &str) -> Self {
        fs::write(self.temp_dir.path().join(name), body).expect("Failed to write root file");
        self
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for CorpusBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A message to render into a fixture page
pub struct Line {
    pub victim: bool,
    pub text: &'static str,
    pub time: &'static str,
}

pub fn victim(text: &'static str, time: &'static str) -> Line {
    Line { victim: true, text, time }
}

pub fn actor(text: &'static str, time: &'static str) -> Line {
    Line { victim: false, text, time }
}

/// LockBit 3.0 page; the text block carries the time and read marker on its last lines
pub fn lockbit_page(chat_id: &str, lines: &[Line]) -> String {
    let items: String = lines
        .iter()
        .map(|l| {
            let class = if l.victim { "chat-item-income" } else { "chat-item-out" };
            format!(
                "<div class=\"chat-item {}\"><div class=\"text\">{}\n{}\nread</div><div class=\"date\">{}</div></div>\n",
                class, l.text, l.time, l.time
            )
        })
        .collect();
    format!("<html><body><h3>{}</h3>\n{}</body></html>", chat_id, items)
}

pub fn mountlocker_page(lines: &[Line]) -> String {
    let items: String = lines
        .iter()
        .map(|l| {
            let class = if l.victim { "alert-success" } else { "alert-info" };
            format!(
                "<div class=\"alert {}\"><strong class=\"float-right\">{}</strong><div class=\"chat_message\">{}</div></div>\n",
                class, l.time, l.text
            )
        })
        .collect();
    format!("<html><body>{}</body></html>", items)
}

pub fn trinity_page(lines: &[Line]) -> String {
    let items: String = lines
        .iter()
        .map(|l| {
            let class = if l.victim { "outgoing_msg" } else { "incoming_msg" };
            format!("<div class=\"{}\"><div><p>{}</p></div></div>\n", class, l.text)
        })
        .collect();
    format!("<html><body><div class=\"msg_history\">{}</div></body></html>", items)
}

/// Fog page with one date separator ahead of all messages
pub fn fog_page(date: &str, lines: &[Line]) -> String {
    let separator = format!(
        "<div class=\"g-box g-flex\"><span class=\"g-text g-text_variant_body-1 g-color-text g-color-text_color_secondary\" style=\"text-align: center\">{}</span></div>",
        date
    );
    let rows: String = lines
        .iter()
        .map(|l| {
            let side = if l.victim { "right" } else { "left" };
            format!(
                "<div class=\"g-box g-flex\"><div class=\"g-box g-flex g-flex_s_2 {}\"><div class=\"g-flex__wr\">{}</div><div class=\"g-flex__wr\">{}</div></div></div>",
                side, l.text, l.time
            )
        })
        .collect();
    format!(
        "<html><body><div class=\"chat-messages\"><div class=\"g-box g-flex\"><div class=\"g-box g-flex\">{}{}</div></div></div></body></html>",
        separator, rows
    )
}
