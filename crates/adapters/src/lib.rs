pub mod embedded;
pub mod fs;
pub mod presenters;

pub use embedded::EmbeddedCatalogSource;
pub use fs::{JsonFileCatalogSource, SystemClock};
pub use presenters::{present_detail, present_event_row};

use fcc_gallery_application::ApplicationError;
use fcc_gallery_domain::EventRecord;

/// Parses a JSON array of events. Missing `details` and `note` default to
/// empty; anything else malformed is a decode error.
pub fn parse_events(json: &str) -> Result<Vec<EventRecord>, ApplicationError> {
    serde_json::from_str(json).map_err(|error| ApplicationError::Decode(error.to_string()))
}
