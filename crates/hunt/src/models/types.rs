//! Core data types and enums for a hunt.

use std::sync::Arc;

use geo::Point;

// ============================================================================
// Enums
// ============================================================================

/// Qualitative outcome of one proximity check
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// First check of a hunt; there is no previous distance to compare against
    NoBaseline,
    /// Strictly closer than the previous check
    Warmer,
    /// As far or farther than the previous check
    Colder,
    /// Within the victory radius; the hunt is over
    Found,
}

impl Feedback {
    /// The sound cue the host should play for this outcome, if any
    pub fn cue(self) -> Option<AudioCue> {
        match self {
            Feedback::NoBaseline => None,
            Feedback::Warmer => Some(AudioCue::Warmer),
            Feedback::Colder => Some(AudioCue::Colder),
            Feedback::Found => Some(AudioCue::Victory),
        }
    }

    /// On-screen feedback text for this outcome
    pub fn message(self) -> &'static str {
        match self {
            Feedback::NoBaseline => "Move around to get closer!",
            Feedback::Warmer => "Getting warmer! You're moving closer.",
            Feedback::Colder => "Getting colder! Try another direction.",
            Feedback::Found => "You found it!",
        }
    }
}

/// Lifecycle of a hunt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HuntPhase {
    #[default]
    Active,
    /// Terminal; no further proximity checks should be issued
    Found,
}

/// Sound assets the host platform plays during a hunt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Warmer,
    Colder,
    Victory,
}

// ============================================================================
// Data Structures
// ============================================================================

/// A hunt destination decoded from a scanned payload
///
/// Built once per hunt and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Target {
    pub name: Arc<str>,
    pub location: Point,
}

impl Target {
    pub fn new(name: impl AsRef<str>, location: Point) -> Self {
        Self {
            name: name.as_ref().into(),
            location,
        }
    }
}

/// Whether both coordinates of a fix are finite numbers
///
/// Distance classification is only defined for finite fixes; a NaN or
/// infinite coordinate would poison every later comparison.
pub fn is_finite_fix(fix: Point) -> bool {
    fix.x().is_finite() && fix.y().is_finite()
}

/// Whether a fix lies within valid geographic bounds
/// (latitude in [-90, 90], longitude in [-180, 180])
pub fn in_geographic_range(fix: Point) -> bool {
    (-90.0..=90.0).contains(&fix.y()) && (-180.0..=180.0).contains(&fix.x())
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("geo URI needs at least latitude and longitude: {0}")]
    InvalidGeoUri(String),

    #[error("payload is neither a geo URI nor location JSON: {0}")]
    MalformedPayload(String),

    #[error("payload lacks usable coordinates")]
    MissingCoordinates,
}

pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_cues() {
        assert_eq!(Feedback::NoBaseline.cue(), None);
        assert_eq!(Feedback::Warmer.cue(), Some(AudioCue::Warmer));
        assert_eq!(Feedback::Colder.cue(), Some(AudioCue::Colder));
        assert_eq!(Feedback::Found.cue(), Some(AudioCue::Victory));
    }

    #[test]
    fn test_fix_validity() {
        assert!(is_finite_fix(Point::new(-73.9935, 40.7505)));
        assert!(!is_finite_fix(Point::new(f64::NAN, 40.7505)));
        assert!(!is_finite_fix(Point::new(-73.9935, f64::INFINITY)));

        assert!(in_geographic_range(Point::new(-73.9935, 40.7505)));
        assert!(!in_geographic_range(Point::new(-73.9935, 95.0)));
        assert!(!in_geographic_range(Point::new(190.0, 40.7505)));
    }
}
