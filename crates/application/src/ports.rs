use fcc_gallery_domain::EventRecord;

use crate::ApplicationError;

/// Static configuration the event catalog is built from.
pub trait CatalogSource {
    fn describe(&self) -> String;

    fn load_events(&self) -> Result<Vec<EventRecord>, ApplicationError>;
}

pub trait Clock {
    fn now_millis(&self) -> u64;
}
