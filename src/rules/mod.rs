pub mod severity;
pub mod types;

pub use severity::{SastSeverity, Severity};
pub use types::*;
