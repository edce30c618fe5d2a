//! Warmer/colder classification against a fixed target.
//!
//! The tracker compares each position fix against the distance recorded at
//! the previous check, so checks must be applied in the order their fixes
//! arrived.

use geo::Point;

use crate::models::types::{Feedback, HuntPhase, Target};
use crate::spatial::queries::haversine_distance_m;

/// Distance below which the target counts as found, in meters
pub const VICTORY_RADIUS_M: f64 = 10.0;

/// Classifies repeated proximity checks for one hunt
///
/// Holds the fixed target plus the distance seen at the previous check.
pub struct ProximityTracker {
    target: Target,
    last_distance_m: Option<f64>,
    phase: HuntPhase,
}

impl ProximityTracker {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            last_distance_m: None,
            phase: HuntPhase::default(),
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn phase(&self) -> HuntPhase {
        self.phase
    }

    /// Distance recorded at the previous check; `None` before the first one
    pub fn last_distance_m(&self) -> Option<f64> {
        self.last_distance_m
    }

    /// Classify the current fix against the previous check.
    ///
    /// Both coordinates of `current` must be finite. Once `Found` has been
    /// returned the hunt is over; issuing further checks violates the
    /// caller contract and their classification is unspecified.
    pub fn check(&mut self, current: Point) -> Feedback {
        let distance = haversine_distance_m(current, self.target.location);

        // Victory wins over every other classification; the stored distance
        // stays untouched on this path.
        if distance < VICTORY_RADIUS_M {
            self.phase = HuntPhase::Found;
            return Feedback::Found;
        }

        let feedback = match self.last_distance_m {
            None => Feedback::NoBaseline,
            Some(last) if distance < last => Feedback::Warmer,
            // Ties classify as colder: only a strictly shrinking distance warms.
            Some(_) => Feedback::Colder,
        };

        self.last_distance_m = Some(distance);
        feedback
    }
}
