use std::fs;
use std::path::PathBuf;

use fcc_gallery_application::{ApplicationError, CatalogSource};
use fcc_gallery_domain::EventRecord;

use crate::parse_events;

#[derive(Debug, Clone)]
pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileCatalogSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load_events(&self) -> Result<Vec<EventRecord>, ApplicationError> {
        let raw = fs::read_to_string(&self.path).map_err(|error| {
            ApplicationError::Io(format!("failed to read {}: {error}", self.path.display()))
        })?;
        tracing::debug!(path = %self.path.display(), bytes = raw.len(), "read catalog file");
        parse_events(&raw)
    }
}
