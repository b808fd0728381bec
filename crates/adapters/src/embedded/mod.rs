use fcc_gallery_application::{ApplicationError, CatalogSource};
use fcc_gallery_domain::EventRecord;

use crate::parse_events;

const CHAMPIONSHIP_EVENTS: &str = include_str!("events.json");

/// The championship's own event list, compiled into the binary.
#[derive(Debug, Default)]
pub struct EmbeddedCatalogSource;

impl CatalogSource for EmbeddedCatalogSource {
    fn describe(&self) -> String {
        "built-in championship events".to_string()
    }

    fn load_events(&self) -> Result<Vec<EventRecord>, ApplicationError> {
        parse_events(CHAMPIONSHIP_EVENTS)
    }
}
