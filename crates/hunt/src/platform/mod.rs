//! Host platform abstractions.

pub mod traits;

pub use traits::{CuePlayer, FixAccuracy, WatchSettings};
