pub mod file_reader;
pub mod settings;

pub use file_reader::FileReader;
pub use settings::{read_catalog, read_settings};
