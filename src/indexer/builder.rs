//! Chat index builder.
//!
//! # Error Handling Strategy
//!
//! - **Root listing**: if the repository root cannot be listed there is nothing to
//!   index, so the error is returned.
//! - **Group-level errors**: a group whose directory listing fails is logged and
//!   recorded with zero chats and messages.
//! - **File-level errors**: a chat file that cannot be fetched or decoded is
//!   logged, still listed, and counts zero messages.
//!
//! The index does not distinguish "zero because empty" from "zero because the
//! read failed"; the log is the only record of the latter.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::{SubsecRound, Utc};
use tracing::{info, warn};

use super::config::IndexConfig;
use super::counting::count_messages;
use super::source::{RepoEntry, RepositorySource};
use crate::index_storage::save_index;
use crate::models::{ChatIndex, ChatSummary, GroupIndex, IndexStatistics};

/// Build the chat index from `source`
///
/// Every non-reserved top-level directory is a group; every `.json` file inside
/// a group is a chat.
///
/// # Errors
///
/// Returns an error only when the repository root cannot be listed.
///
/// # Examples
///
/// ```no_run
/// use ransomchats::indexer::{IndexConfig, LocalRepository, build_chat_index};
///
/// let repo = LocalRepository::new("/srv/Ransomchats");
/// let index = build_chat_index(&repo, &IndexConfig::default())?;
/// println!("{} chats", index.statistics.total_chats);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_chat_index<S>(source: &S, config: &IndexConfig) -> Result<ChatIndex>
where
    S: RepositorySource + ?Sized,
{
    let root = source.list_directory("").context("Failed to list repository root")?;
    let groups: Vec<String> = root
        .into_iter()
        .filter(|entry| entry.is_dir() && !config.is_reserved(&entry.name))
        .map(|entry| entry.name)
        .collect();

    let mut statistics = IndexStatistics { total_groups: groups.len(), ..Default::default() };
    let mut indexed_groups = BTreeMap::new();

    for group in groups {
        let group_index = match index_group(source, config, &group) {
            Ok(group_index) => group_index,
            Err(e) => {
                warn!("Error processing group {}: {:#}", group, e);
                GroupIndex::default()
            }
        };

        info!(
            "Indexed {}: {} chats, {} messages",
            group,
            group_index.group_statistics.chat_count,
            group_index.group_statistics.message_count
        );
        statistics.total_chats += group_index.group_statistics.chat_count;
        statistics.total_messages += group_index.group_statistics.message_count;
        indexed_groups.insert(group, group_index);
    }

    // Microsecond precision, the same as the serialized form
    let last_updated = Utc::now().trunc_subsecs(6);
    Ok(ChatIndex { last_updated, statistics, groups: indexed_groups })
}

/// Build the index, write it to `config.output_path`, and return it
pub fn generate_chat_index<S>(source: &S, config: &IndexConfig) -> Result<ChatIndex>
where
    S: RepositorySource + ?Sized,
{
    let index = build_chat_index(source, config)?;
    save_index(&config.output_path, &index)?;
    info!("Wrote {}", config.output_path.display());
    Ok(index)
}

fn index_group<S>(source: &S, config: &IndexConfig, group: &str) -> Result<GroupIndex>
where
    S: RepositorySource + ?Sized,
{
    let entries = source.list_directory(group)?;
    let mut group_index = GroupIndex::default();

    for entry in entries.iter().filter(|e| e.is_file() && e.name.ends_with(".json")) {
        let message_count = match read_message_count(source, entry) {
            Ok(count) => count,
            Err(e) => {
                warn!("Error reading {}: {:#}", entry.name, e);
                0
            }
        };

        group_index.push(ChatSummary {
            filename: entry.name.clone(),
            chat_id: entry.name.replace(".json", ""),
            raw_url: config.raw_url(group, &entry.name),
            message_count,
        });
    }

    Ok(group_index)
}

fn read_message_count<S>(source: &S, entry: &RepoEntry) -> Result<usize>
where
    S: RepositorySource + ?Sized,
{
    let bytes = source.read_file(entry)?;
    let value: serde_json::Value =
        serde_json::from_slice(&bytes).context("File is not valid JSON")?;
    Ok(count_messages(&value))
}
