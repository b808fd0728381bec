mod catalog_file;
mod clock;

pub use catalog_file::JsonFileCatalogSource;
pub use clock::SystemClock;
