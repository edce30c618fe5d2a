//! # qr-hunt
//!
//! Gameplay core for a QR-code treasure hunt: scan a code for target
//! coordinates, then chase warmer/colder feedback until the spot is found.
//!
//! ## Features
//!
//! - **Payload parsing**: `geo:` URIs and location JSON from scanned codes
//! - **Proximity feedback**: haversine distance classified against the
//!   previous check, with a victory radius
//! - **Pluggable platform seams**: audio playback and location watching
//!   stay on the host side behind small traits
//!
//! ## Example
//!
//! ```
//! use qr_hunt::prelude::*;
//! use geo::Point;
//!
//! let target = parse_target("geo:40.7505,-73.9935").unwrap();
//! assert_eq!(&*target.name, "Location from QR Code");
//!
//! let mut session = HuntSession::new(target);
//!
//! // A fix arrives from the host location watcher
//! session.record_fix(Point::new(-74.0060, 40.7128));
//!
//! struct Silent;
//! impl CuePlayer for Silent {
//!     fn play(&self, _cue: AudioCue) {}
//! }
//!
//! // First check has nothing to compare against
//! let feedback = session.check_proximity(&Silent).unwrap();
//! assert_eq!(feedback, Feedback::NoBaseline);
//! ```

pub mod models;
pub mod payload;
pub mod platform;
pub mod session;
pub mod spatial;
pub mod tracker;

// Re-exports for convenience
pub mod prelude {
    pub use crate::models::types::{
        is_finite_fix, AudioCue, Feedback, HuntPhase, Result, ScanError, Target,
    };
    pub use crate::payload::{parse_target, DEFAULT_TARGET_NAME};
    pub use crate::platform::traits::{CuePlayer, FixAccuracy, WatchSettings};
    pub use crate::session::HuntSession;
    pub use crate::spatial::queries::{haversine_distance_m, EARTH_RADIUS_M};
    pub use crate::tracker::{ProximityTracker, VICTORY_RADIUS_M};
}

pub use prelude::*;
