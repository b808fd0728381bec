use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventDetail {
    pub label: String,
    pub value: String,
}

impl EventDetail {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// One championship event as shown on a gallery tile and in the detail view.
///
/// `image` is handed untouched to whatever loads pictures for the display
/// surface; nothing here resolves or checks it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventRecord {
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub details: Vec<EventDetail>,
    #[serde(default)]
    pub note: String,
}

/// Ordered, read-only list of events. Built once and never reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCatalog {
    events: Vec<EventRecord>,
}

impl EventCatalog {
    pub fn new(events: Vec<EventRecord>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(events.len());
        for (position, event) in events.iter().enumerate() {
            if event.title.trim().is_empty() {
                return Err(DomainError::EmptyTitle { position });
            }
            if !seen.insert(event.title.as_str()) {
                return Err(DomainError::DuplicateTitle(event.title.clone()));
            }
        }

        Ok(Self { events })
    }

    pub fn get(&self, index: usize) -> Result<&EventRecord, DomainError> {
        self.events.get(index).ok_or(DomainError::OutOfRange {
            index,
            len: self.events.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventRecord> {
        self.events.iter()
    }
}
