//! Output records.
//!
//! Field names serialize in the PascalCase shape the activity feed reads
//! (`ID`, `Title`, `Body`, `URL`, `Type`, `Time`; `Src`, `Dsts`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened to the subject of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A symbol definition overlapping a hunk.
    Modified,
    /// A token referenced from an added line.
    Referenced,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::Modified => write!(f, "modified"),
            EventType::Referenced => write!(f, "referenced"),
        }
    }
}

/// One entry of the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// `<kind>:<subject>:<file>:<commit url>`, stable across reruns.
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Body")]
    pub body: String,
    /// Link to the commit.
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Type")]
    pub event_type: EventType,
    /// Commit author time.
    #[serde(rename = "Time")]
    pub time: DateTime<Utc>,
}

/// Fan-out edge: notify `src` about changes to each of `dsts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionUpdate {
    #[serde(rename = "Src")]
    pub src: String,
    #[serde(rename = "Dsts")]
    pub dsts: Vec<String>,
}

/// Everything a run hands to the output sink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(rename = "Events")]
    pub events: Vec<ChangeEvent>,
    #[serde(rename = "SubscriptionUpdates")]
    pub subscription_updates: Vec<SubscriptionUpdate>,
}
