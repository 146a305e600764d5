mod mapping_loader;
mod path_validator;
mod stylesheet_scanner;

pub use mapping_loader::{RenameMapping, RenameRule, load_mapping};
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
pub use stylesheet_scanner::{StylesheetFile, scan_stylesheet_files};
