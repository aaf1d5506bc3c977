pub mod config_scanner;
pub mod file_walker;

pub use config_scanner::{ConfigFinding, ConfigScanner};
pub use file_walker::{FileWalker, read_text, walk_all};
