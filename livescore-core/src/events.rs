//! Event catalog mapping event ids to result formats.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::format::Format;

const DEFAULT_EVENTS_DATA: &str = include_str!("../data/events.json");

/// Resolves an event id to the format its results are stored in.
///
/// Competition data is owned by the caller; implement this to plug in a
/// custom event table.
pub trait FormatLookup {
    fn format_for(&self, event_id: &str) -> Option<Format>;
}

impl<T: FormatLookup + ?Sized> FormatLookup for &T {
    fn format_for(&self, event_id: &str) -> Option<Format> {
        (**self).format_for(event_id)
    }
}

impl FormatLookup for HashMap<String, Format> {
    fn format_for(&self, event_id: &str) -> Option<Format> {
        self.get(event_id).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInfo {
    pub id: String,
    pub name: String,
    pub format: Format,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EventCatalog {
    #[serde(default)]
    pub events: Vec<EventInfo>,
}

impl EventCatalog {
    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_EVENTS_DATA).unwrap_or_default()
    }

    /// Shared instance of the embedded catalog.
    #[must_use]
    pub fn default_catalog() -> &'static Self {
        static CATALOG: OnceLock<EventCatalog> = OnceLock::new();
        CATALOG.get_or_init(Self::load_from_static)
    }

    /// Parse a catalog document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a catalog.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn get(&self, event_id: &str) -> Option<&EventInfo> {
        self.events.iter().find(|event| event.id == event_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventInfo> {
        self.events.iter()
    }
}

impl FormatLookup for EventCatalog {
    fn format_for(&self, event_id: &str) -> Option<Format> {
        self.get(event_id).map(|event| event.format)
    }
}
