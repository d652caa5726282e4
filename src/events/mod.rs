//! Change events for the activity feed.
//!
//! Every modified symbol and every reference occurrence becomes one
//! [`ChangeEvent`]. Each event also yields two [`SubscriptionUpdate`]s
//! linking the commit author (by first name and by full name) to the
//! event's subject.
//!
//! # Event IDs
//!
//! `<kind>:<subject>:<file>:<commit url>` where kind is `modified`,
//! `referenced` or `referenced(markup)`. Downstream deduplicates on it.

mod assembler;
mod types;


pub use assembler::{
    EventAssembler, KIND_MODIFIED, KIND_REFERENCED, KIND_REFERENCED_MARKUP, event_id,
    reference_id_kind,
};
pub use types::{ChangeEvent, EventPayload, EventType, SubscriptionUpdate};
