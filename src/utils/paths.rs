use std::borrow::Cow;
use std::env;
use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

// Maximum size for an HTML export: 64MB
const MAX_FILE_SIZE_BYTES: u64 = 64 * 1024 * 1024;

/// Whether `path` ends in `.{extension}` (case-sensitive, as the portals save them)
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use ransomchats::utils::has_extension;
///
/// assert!(has_extension(Path::new("chat.htm"), "htm"));
/// assert!(!has_extension(Path::new("chat.html"), "htm"));
/// ```
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension() == Some(OsStr::new(extension))
}

/// Output location for a converted file: same stem, `.json`, inside `output_dir`
///
/// Returns `None` for paths without a file name.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use ransomchats::utils::json_output_path;
///
/// let out = json_output_path(Path::new("in/2023-04-01.html"), Path::new("out"));
/// assert_eq!(out, Some(PathBuf::from("out/2023-04-01.json")));
/// ```
pub fn json_output_path(input: &Path, output_dir: &Path) -> Option<PathBuf> {
    let stem = input.file_stem()?;
    let mut name = stem.to_os_string();
    name.push(".json");
    Some(output_dir.join(name))
}

/// Validates that a file's size is within acceptable limits (64MB)
///
/// Takes an open file handle so the size checked is the size read.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 64MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

/// Open, size-check and read a UTF-8 text file
pub fn read_text_file(path: &Path) -> Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .with_context(|| format!("Failed to read {} as UTF-8", path.display()))?;
    Ok(contents)
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
