pub mod discovery;
pub mod receipt;
pub mod resolver;
pub mod transfer;

pub use discovery::{find_all_matches, find_matches};
pub use receipt::write_receipt;
pub use resolver::resolve_specs;
pub use transfer::{transfer_all, transfer_file};
