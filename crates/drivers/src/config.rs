use std::path::PathBuf;

use fcc_gallery_domain::DEFAULT_CONFIRMATION_MS;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON event list to load instead of the built-in championship events.
    pub catalog_path: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
    pub confirmation_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            window_width: 1200.0,
            window_height: 820.0,
            confirmation_ms: DEFAULT_CONFIRMATION_MS,
        }
    }
}

impl AppConfig {
    pub fn with_catalog_path(mut self, catalog_path: Option<PathBuf>) -> Self {
        if catalog_path.is_some() {
            self.catalog_path = catalog_path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_built_in_catalog() {
        let config = AppConfig::default();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.confirmation_ms, 3_000);
    }

    #[test]
    fn catalog_flag_overrides_default_only_when_given() {
        let config = AppConfig::default().with_catalog_path(Some(PathBuf::from("events.json")));
        assert_eq!(config.catalog_path, Some(PathBuf::from("events.json")));

        let config = config.with_catalog_path(None);
        assert_eq!(config.catalog_path, Some(PathBuf::from("events.json")));
    }
}
