use serde::{Deserialize, Serialize};

/// A single negotiation message as written to the per-chat JSON files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub party: String,
    pub content: String,
    /// Free-form, dialect-specific; empty when the portal shows no time
    #[serde(default)]
    pub timestamp: String,
}

/// One converted chat transcript, one per input HTML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    #[serde(default)]
    pub chat_id: String,
    pub messages: Vec<Message>,
}

impl Chat {
    pub fn new(chat_id: impl Into<String>) -> Self {
        Self { chat_id: chat_id.into(), messages: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Which side of the negotiation a message element belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    Victim,
    Actor,
}

/// Labels a dialect writes into `Message::party`
///
/// Casing differs between portals ("Victim" vs "victim") and is kept as found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartyLabels {
    pub victim: &'static str,
    pub actor: &'static str,
}

impl PartyLabels {
    pub fn label(&self, party: Party) -> &'static str {
        match party {
            Party::Victim => self.victim,
            Party::Actor => self.actor,
        }
    }
}
