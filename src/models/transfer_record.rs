use std::path::PathBuf;

/// The old-path/new-path pair logging one completed copy or move. Created
/// exactly once per transferred file, in completion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRecord {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
}

impl TransferRecord {
    pub fn new(old_path: PathBuf, new_path: PathBuf) -> Self {
        Self { old_path, new_path }
    }
}
