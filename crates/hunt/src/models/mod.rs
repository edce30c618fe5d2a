//! Hunt data models, feedback vocabulary, and errors.

pub mod types;

// Re-exports for convenience
pub use types::{AudioCue, Feedback, HuntPhase, Result, ScanError, Target};
