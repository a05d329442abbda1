use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Naive UTC with microseconds, the layout of the published index
const LAST_UPDATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Aggregate summary of every group's chats, written to `chat_index.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatIndex {
    #[serde(serialize_with = "serialize_last_updated")]
    #[serde(deserialize_with = "deserialize_last_updated")]
    pub last_updated: DateTime<Utc>,
    pub statistics: IndexStatistics,
    pub groups: BTreeMap<String, GroupIndex>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStatistics {
    pub total_groups: usize,
    pub total_chats: usize,
    pub total_messages: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupIndex {
    pub chats: Vec<ChatSummary>,
    pub group_statistics: GroupStatistics,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStatistics {
    pub chat_count: usize,
    pub message_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSummary {
    pub filename: String,
    pub chat_id: String,
    pub raw_url: String,
    pub message_count: usize,
}

impl GroupIndex {
    /// Append a chat and fold its count into the group statistics
    pub fn push(&mut self, chat: ChatSummary) {
        self.group_statistics.chat_count += 1;
        self.group_statistics.message_count += chat.message_count;
        self.chats.push(chat);
    }
}

/// Writes `2024-08-02T07:10:00.123456` (no offset, always six fraction digits)
pub fn serialize_last_updated<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(LAST_UPDATED_FORMAT))
}

/// Accepts the naive layout written above as well as RFC3339 with an offset
pub fn deserialize_last_updated<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&s) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| Error::custom(format!("invalid last_updated timestamp: {}", e)))
}
