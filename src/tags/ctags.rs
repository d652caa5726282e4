//! Tag extraction via an external ctags binary.
//!
//! Universal-ctags is run once over the changed files and its output is
//! parsed into [`Tag`] records. Two output formats are supported:
//! - JSON lines (`--output-format=json`), which carries kind and signature
//! - etags (`-e`), parsed by [`super::etags`]

use super::etags::parse_etags;
use super::types::Tag;
use crate::config::{Config, TagFormat};
use crate::error::{Result, TagdiffError};
use crate::git;
use serde::Deserialize;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;
use tracing::{debug, warn};

/// One line of `ctags --output-format=json` output.
///
/// Pseudo-tag lines (`"_type": "ptag"`) share the shape but are skipped.
#[derive(Debug, Deserialize)]
struct CtagsRecord {
    #[serde(rename = "_type")]
    record_type: String,
    name: Option<String>,
    path: Option<String>,
    line: Option<i64>,
    kind: Option<String>,
    signature: Option<String>,
}

/// Arguments passed to ctags ahead of the file list.
pub fn ctags_args(format: TagFormat) -> &'static [&'static str] {
    match format {
        TagFormat::Json => &["--output-format=json", "--fields=+nKS", "-f", "-"],
        TagFormat::Etags => &["-e", "-f", "-"],
    }
}

/// Extract tags for `files` as they exist in commit `rev`.
///
/// Each file is read from the commit into a scratch directory and ctags runs
/// there, so tag lines always match the new side of `rev`'s diff whatever
/// the state of the working tree. Files absent from `rev` (deleted by the
/// commit) are skipped.
pub fn extract_tags_at<P: AsRef<Path>>(
    repo_root: P,
    config: &Config,
    rev: &str,
    files: &[String],
) -> Result<Vec<Tag>> {
    let repo_root = repo_root.as_ref();
    let snapshot = TempDir::new().map_err(|e| {
        TagdiffError::TagError(format!("failed to create scratch directory: {}", e))
    })?;

    for file in files {
        let Some(contents) = git::file_at(repo_root, rev, file)? else {
            debug!(file = %file, %rev, "skipping file absent from commit");
            continue;
        };
        let dest = snapshot.path().join(file);
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).map_err(|e| snapshot_error(&dest, e))?;
        }
        std::fs::write(&dest, contents).map_err(|e| snapshot_error(&dest, e))?;
    }

    extract_tags(snapshot.path(), config, files)
}

fn snapshot_error(path: &Path, e: std::io::Error) -> TagdiffError {
    TagdiffError::TagError(format!("failed to write '{}': {}", path.display(), e))
}

/// Extract tags for `files` (relative to `repo_root`) by running the
/// configured ctags in `repo_root`.
///
/// Files missing under `repo_root` are skipped before ctags runs. No files
/// means no tags and no subprocess.
///
/// # Returns
///
/// * `Ok(Vec<Tag>)` - Tags in the order ctags reported them
/// * `Err(TagdiffError::TagError)` - ctags failed to start, exited non-zero,
///   or produced output that could not be parsed
pub fn extract_tags<P: AsRef<Path>>(
    repo_root: P,
    config: &Config,
    files: &[String],
) -> Result<Vec<Tag>> {
    let repo_root = repo_root.as_ref();

    let present: Vec<&str> = files
        .iter()
        .filter(|f| {
            let exists = repo_root.join(f).is_file();
            if !exists {
                debug!(file = %f, "skipping file absent from working tree");
            }
            exists
        })
        .map(String::as_str)
        .collect();

    if present.is_empty() {
        return Ok(Vec::new());
    }

    let output = Command::new(&config.ctags_command)
        .current_dir(repo_root)
        .args(ctags_args(config.tag_format))
        .args(&present)
        .output()
        .map_err(|e| {
            TagdiffError::TagError(format!(
                "failed to execute '{}': {} (is universal-ctags installed?)",
                config.ctags_command, e
            ))
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !output.status.success() {
        return Err(TagdiffError::TagError(format!(
            "'{}' failed (exit code {}): {}",
            config.ctags_command,
            output.status.code().unwrap_or(-1),
            stderr.trim()
        )));
    }
    if !stderr.trim().is_empty() {
        warn!(stderr = %stderr.trim(), "ctags reported warnings");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let tags = match config.tag_format {
        TagFormat::Json => parse_ctags_json(&stdout)?,
        TagFormat::Etags => parse_etags(&stdout)?,
    };

    debug!(files = present.len(), tags = tags.len(), "extracted tags");
    Ok(tags)
}

/// Parse universal-ctags JSON lines output.
///
/// Blank lines and pseudo-tags are skipped. Any other line that is not a
/// tag record with a name, path and line is an error.
pub fn parse_ctags_json(output: &str) -> Result<Vec<Tag>> {
    let mut tags = Vec::new();

    for (i, line) in output.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let record: CtagsRecord = serde_json::from_str(line).map_err(|e| {
            TagdiffError::TagError(format!(
                "ctags output line {} is not valid JSON: {} (line was {:?})",
                i + 1,
                e,
                line
            ))
        })?;

        if record.record_type != "tag" {
            continue;
        }

        let (Some(name), Some(path), Some(line_no)) = (record.name, record.path, record.line)
        else {
            return Err(TagdiffError::TagError(format!(
                "ctags output line {} lacks name, path or line (line was {:?})",
                i + 1,
                line
            )));
        };

        tags.push(Tag {
            file: path.replace('\\', "/"),
            name,
            kind: record.kind.unwrap_or_default(),
            signature: record.signature.unwrap_or_default(),
            line: line_no,
        });
    }

    Ok(tags)
}
