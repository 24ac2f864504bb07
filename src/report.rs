//! The uploaded-photos report.
//!
//! One entry per successfully uploaded photo, in upload order. The
//! report is a JSON array written once at the end of a run, pretty-
//! printed with four-space indentation; non-ASCII text is written
//! literally rather than `\u`-escaped.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

/// One uploaded photo: the file name it landed under on Disk and the
/// size-class label of the variant that was uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoInfo {
    pub file_name: String,
    pub size: String,
}

/// Writes the report to `path`, replacing any previous file.
pub fn write_report(path: &Path, entries: &[PhotoInfo]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for {}", path.display()))?;
        }
    }

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    entries
        .serialize(&mut serializer)
        .context("Failed to serialize the photo report")?;

    fs::write(path, buf)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    Ok(())
}
