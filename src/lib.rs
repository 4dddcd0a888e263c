pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use std::path::PathBuf;

// Re-export commonly used types
pub use error::MatchCopyError;
pub use models::{PatternSpec, TransferMode, TransferRecord};
pub use services::{find_all_matches, find_matches, resolve_specs, transfer_all, write_receipt};

// Application configuration for one run
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub src: PathBuf,
    pub dst: PathBuf,
    pub input_file: Option<PathBuf>,
    pub patterns: Vec<String>,
    pub exts: Vec<String>,
    pub mode: TransferMode,
    pub assume_yes: bool,
    pub log_level: String,
}
