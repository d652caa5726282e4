//! Implementation of the `tagdiff events` command.
//!
//! Pipeline: commit diff, hunks, tags for the changed files, overlap
//! correlation, reference scan, then event assembly. The JSON payload is
//! written to stdout in one piece, so a failure at any step prints nothing.

use super::hunks::commit_hunks;
use super::{resolve_repo_root, to_json};
use crate::cli::EventsArgs;
use crate::config::Config;
use crate::correlate::changed_tags;
use crate::diff::{Hunk, changed_files};
use crate::error::Result;
use crate::events::{EventAssembler, EventPayload};
use crate::metadata::CommitMetadata;
use crate::references::ReferenceScanner;
use crate::tags::{SymbolIndex, Tag, extract_tags_at};
use tracing::{debug, info};

/// Execute the `tagdiff events` command.
pub fn cmd_events(args: EventsArgs) -> Result<()> {
    let repo_root = resolve_repo_root(args.repo.repo.as_deref())?;
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(&repo_root)?,
    };
    let rev = args.repo.commit.as_str();

    let hunks = commit_hunks(&repo_root, rev)?;
    let files = changed_files(&hunks);
    debug!(files = ?files, "changed files");

    let tags = extract_tags_at(&repo_root, &config, rev, &files)?;

    let scanner = if config.scan_references && !args.no_refs {
        Some(ReferenceScanner::from_config(&config)?)
    } else {
        None
    };

    let meta = CommitMetadata::collect(&repo_root, &config, rev)?;
    let payload = build_payload(&hunks, tags, scanner.as_ref(), &meta);

    info!(
        events = payload.events.len(),
        subscriptions = payload.subscription_updates.len(),
        "writing payload"
    );
    println!("{}", to_json(&payload, args.repo.pretty)?);
    Ok(())
}

/// Correlate `tags` with `hunks` and assemble the payload for `meta`.
///
/// Without a scanner only modified events are produced.
pub fn build_payload(
    hunks: &[Hunk],
    tags: Vec<Tag>,
    scanner: Option<&ReferenceScanner>,
    meta: &CommitMetadata,
) -> EventPayload {
    let index = SymbolIndex::new(tags);
    let modified = changed_tags(&index, hunks);
    let hits = scanner.map(|s| s.scan(hunks)).unwrap_or_default();

    EventAssembler::new(meta).assemble(&modified, &hits)
}
