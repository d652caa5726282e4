//! Turns matched tags and reference hits into events and subscriptions.

use super::types::{ChangeEvent, EventPayload, EventType, SubscriptionUpdate};
use crate::metadata::CommitMetadata;
use crate::references::{ReferenceHit, ReferenceKind};
use crate::tags::Tag;
use tracing::info;

/// ID kind for a symbol definition overlapping a hunk.
pub const KIND_MODIFIED: &str = "modified";
/// ID kind for a call-like reference.
pub const KIND_REFERENCED: &str = "referenced";
/// ID kind for a markup-like reference.
pub const KIND_REFERENCED_MARKUP: &str = "referenced(markup)";

/// Deterministic event ID: `<kind>:<subject>:<file>:<commit url>`.
pub fn event_id(kind: &str, subject: &str, file: &str, commit_url: &str) -> String {
    format!("{}:{}:{}:{}", kind, subject, file, commit_url)
}

/// ID kind for a reference hit.
pub fn reference_id_kind(kind: ReferenceKind) -> &'static str {
    match kind {
        ReferenceKind::Call => KIND_REFERENCED,
        ReferenceKind::Markup => KIND_REFERENCED_MARKUP,
    }
}

/// Builds events for one commit.
///
/// Output depends only on the inputs, so rerunning on the same commit gives
/// the same IDs and subscription edges.
#[derive(Debug, Clone, Copy)]
pub struct EventAssembler<'a> {
    meta: &'a CommitMetadata,
}

impl<'a> EventAssembler<'a> {
    pub fn new(meta: &'a CommitMetadata) -> Self {
        Self { meta }
    }

    /// Event for a symbol definition touched by the commit.
    pub fn modified(&self, tag: &Tag) -> ChangeEvent {
        let label = symbol_label(tag);
        ChangeEvent {
            id: event_id(KIND_MODIFIED, &tag.name, &tag.file, &self.meta.commit_url),
            title: format!("{} modified {}", self.meta.author_name, label),
            body: format!(
                "{} modified {} in {} on branch {} of {}",
                self.meta.author_name, label, tag.file, self.meta.branch, self.meta.remote_url
            ),
            url: self.meta.commit_url.clone(),
            event_type: EventType::Modified,
            time: self.meta.time,
        }
    }

    /// Event for one reference occurrence on an added line.
    pub fn referenced(&self, hit: &ReferenceHit) -> ChangeEvent {
        let (verb, what) = match hit.kind {
            ReferenceKind::Call => ("referenced", hit.name.clone()),
            ReferenceKind::Markup => ("used", format!("<{}>", hit.name)),
        };
        ChangeEvent {
            id: event_id(
                reference_id_kind(hit.kind),
                &hit.name,
                &hit.file,
                &self.meta.commit_url,
            ),
            title: format!("{} {} {}", self.meta.author_name, verb, what),
            body: format!(
                "{} {} {} in {} on branch {} of {}",
                self.meta.author_name,
                verb,
                what,
                hit.file,
                self.meta.branch,
                self.meta.remote_url
            ),
            url: self.meta.commit_url.clone(),
            event_type: EventType::Referenced,
            time: self.meta.time,
        }
    }

    /// The two fan-out edges for `subject`: first name, then full name.
    pub fn subscriptions(&self, subject: &str) -> [SubscriptionUpdate; 2] {
        [
            SubscriptionUpdate {
                src: self.meta.author_first_name.clone(),
                dsts: vec![subject.to_string()],
            },
            SubscriptionUpdate {
                src: self.meta.author_name.clone(),
                dsts: vec![subject.to_string()],
            },
        ]
    }

    /// Modified events for `tags` followed by referenced events for `hits`,
    /// with two subscription updates per event in the same order.
    pub fn assemble(&self, tags: &[&Tag], hits: &[ReferenceHit]) -> EventPayload {
        let mut payload = EventPayload {
            events: Vec::with_capacity(tags.len() + hits.len()),
            subscription_updates: Vec::with_capacity(2 * (tags.len() + hits.len())),
        };

        for tag in tags {
            payload.events.push(self.modified(tag));
            payload.subscription_updates.extend(self.subscriptions(&tag.name));
        }
        for hit in hits {
            payload.events.push(self.referenced(hit));
            payload.subscription_updates.extend(self.subscriptions(&hit.name));
        }

        info!(
            modified = tags.len(),
            referenced = hits.len(),
            commit = %self.meta.commit_hash,
            "assembled events"
        );
        payload
    }
}

/// `<kind> <name><signature>`, without a leading space when kind is empty.
fn symbol_label(tag: &Tag) -> String {
    if tag.kind.is_empty() {
        format!("{}{}", tag.name, tag.signature)
    } else {
        format!("{} {}{}", tag.kind, tag.name, tag.signature)
    }
}
