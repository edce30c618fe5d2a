//! Pluggable host platform capabilities.
//!
//! The surrounding mobile app implements these to provide audio playback
//! and to configure its location watcher. The core stays synchronous and
//! testable without a device.

use crate::models::types::AudioCue;

/// Plays a sound cue on the host platform
pub trait CuePlayer: Send + Sync {
    fn play(&self, cue: AudioCue);
}

/// Accuracy requested from the host location watcher
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixAccuracy {
    Low,
    Balanced,
    High,
}

/// Configuration handed to the host location watcher
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WatchSettings {
    pub accuracy: FixAccuracy,
    /// Minimum movement between delivered fixes, in meters
    pub distance_interval_m: f64,
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self {
            accuracy: FixAccuracy::High,
            distance_interval_m: 1.0,
        }
    }
}
