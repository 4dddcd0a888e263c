pub mod pattern_spec;
pub mod transfer_record;

pub use pattern_spec::{PatternSpec, TransferMode};
pub use transfer_record::TransferRecord;
