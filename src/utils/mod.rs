pub mod file_operations;

pub use file_operations::{matches_extensions, split_file_name};
