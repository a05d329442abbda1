use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{info, warn};

use super::dialect::Dialect;
use super::engine::extract_chat_from_str;
use crate::models::Chat;
use crate::utils::{has_extension, json_output_path, read_text_file};

/// Outcome of converting one input directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub files_converted: usize,
    pub files_failed: usize,
    pub messages_extracted: usize,
    /// Written JSON files, in the order they were produced
    pub outputs: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub output_path: PathBuf,
    pub message_count: usize,
}

/// Convert one HTML export into `<output_dir>/<stem>.json`
pub fn convert_file(dialect: &Dialect, input: &Path, output_dir: &Path) -> Result<ConvertedFile> {
    let source = read_text_file(input)?;
    let chat = extract_chat_from_str(dialect, &source).with_context(|| {
        format!("Failed to extract {} chat from {}", dialect.name, input.display())
    })?;

    let output_path = json_output_path(input, output_dir)
        .with_context(|| format!("No file name in {}", input.display()))?;
    write_chat(&output_path, &chat)?;

    Ok(ConvertedFile { output_path, message_count: chat.len() })
}

/// Convert every file with the dialect's extension in `input_dir`
///
/// Files are visited in directory listing order. A file that fails is logged and
/// counted; the rest of the batch still runs.
///
/// # Errors
///
/// Returns an error only if the input directory cannot be listed or the output
/// directory cannot be created.
pub fn convert_directory(
    dialect: &Dialect,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<ConversionReport> {
    let entries = fs::read_dir(input_dir)
        .with_context(|| format!("Failed to read input directory: {}", input_dir.display()))?;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let mut report = ConversionReport::default();

    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                warn!("Failed to read directory entry in {}: {}", input_dir.display(), e);
                report.files_failed += 1;
                continue;
            }
        };

        if !path.is_file() || !has_extension(&path, dialect.extension) {
            continue;
        }

        info!("Processing {}", path.display());
        match convert_file(dialect, &path, output_dir) {
            Ok(converted) => {
                info!(
                    "Chat data extracted and saved as {} ({} messages)",
                    converted.output_path.display(),
                    converted.message_count
                );
                report.files_converted += 1;
                report.messages_extracted += converted.message_count;
                report.outputs.push(converted.output_path);
            }
            Err(e) => {
                warn!("Failed to convert {}: {:#}", path.display(), e);
                report.files_failed += 1;
            }
        }
    }

    Ok(report)
}

/// Pretty-print with four-space indentation, matching the published corpus
fn write_chat(path: &Path, chat: &Chat) -> Result<()> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    chat.serialize(&mut serializer).context("Failed to serialize chat")?;
    buffer.push(b'\n');

    fs::write(path, buffer).with_context(|| format!("Failed to write {}", path.display()))
}
