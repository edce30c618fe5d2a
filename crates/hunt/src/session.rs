//! One hunt from scan to victory.
//!
//! A session owns the proximity tracker plus the latest fix delivered by
//! the host location watcher. Checks are demand-driven: the host triggers
//! one whenever the user asks "Am I Close?".

use geo::Point;
use tracing::{debug, warn};

use crate::models::types::{is_finite_fix, Feedback, HuntPhase, Target};
use crate::platform::traits::CuePlayer;
use crate::tracker::ProximityTracker;

pub struct HuntSession {
    tracker: ProximityTracker,
    current_fix: Option<Point>,
}

impl HuntSession {
    pub fn new(target: Target) -> Self {
        Self {
            tracker: ProximityTracker::new(target),
            current_fix: None,
        }
    }

    pub fn target(&self) -> &Target {
        self.tracker.target()
    }

    pub fn phase(&self) -> HuntPhase {
        self.tracker.phase()
    }

    /// Latest fix delivered by the host, if any has arrived yet
    pub fn current_fix(&self) -> Option<Point> {
        self.current_fix
    }

    /// Distance recorded at the previous check; `None` before the first one
    pub fn last_distance_m(&self) -> Option<f64> {
        self.tracker.last_distance_m()
    }

    /// Record a position fix from the host location watcher.
    ///
    /// Fixes with a non-finite coordinate are dropped; they cannot be
    /// classified.
    pub fn record_fix(&mut self, fix: Point) {
        if !is_finite_fix(fix) {
            warn!(lat = fix.y(), lon = fix.x(), "dropping non-finite fix");
            return;
        }
        self.current_fix = Some(fix);
    }

    /// Run one proximity check against the latest fix and play the matching
    /// audio cue.
    ///
    /// Returns `None` when no fix has arrived yet; the host keeps waiting
    /// for the watcher in that case.
    pub fn check_proximity(&mut self, cues: &dyn CuePlayer) -> Option<Feedback> {
        let fix = self.current_fix?;
        let feedback = self.tracker.check(fix);

        debug!(
            ?feedback,
            distance_m = ?self.tracker.last_distance_m(),
            "proximity check"
        );

        if let Some(cue) = feedback.cue() {
            cues.play(cue);
        }

        Some(feedback)
    }
}
