//! Active hunt state exported to the hunt screen.
//!
//! The host streams position fixes in and triggers one proximity check per
//! "Am I Close?" tap; audio cues flow back out through a foreign-implemented
//! callback.

use std::sync::Arc;

use geo::Point;
use qr_hunt::prelude::{Feedback, FixAccuracy, HuntPhase, HuntSession, Target, WatchSettings};
use tokio::sync::RwLock;
use tracing::info;

use crate::state::scanner::ScannedTarget;

/// Display name used when the handoff from the scanner carries no name
const FALLBACK_TARGET_NAME: &str = "Unknown Location";

/// Host-implemented audio playback for feedback cues
#[uniffi::export(with_foreign)]
pub trait CuePlayer: Send + Sync {
    fn play(&self, cue: AudioCue);
}

/// Sound assets the host plays during a hunt
#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum AudioCue {
    Warmer,
    Colder,
    Victory,
}

impl From<qr_hunt::AudioCue> for AudioCue {
    fn from(cue: qr_hunt::AudioCue) -> Self {
        match cue {
            qr_hunt::AudioCue::Warmer => Self::Warmer,
            qr_hunt::AudioCue::Colder => Self::Colder,
            qr_hunt::AudioCue::Victory => Self::Victory,
        }
    }
}

/// One position fix from the host location watcher
#[derive(Clone, Copy, Debug, PartialEq, uniffi::Record)]
pub struct PositionFix {
    pub latitude: f64,
    pub longitude: f64,
}

/// Feedback category for one proximity check
#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum FeedbackKind {
    NoBaseline,
    Warmer,
    Colder,
    Found,
}

impl From<Feedback> for FeedbackKind {
    fn from(feedback: Feedback) -> Self {
        match feedback {
            Feedback::NoBaseline => Self::NoBaseline,
            Feedback::Warmer => Self::Warmer,
            Feedback::Colder => Self::Colder,
            Feedback::Found => Self::Found,
        }
    }
}

/// Outcome of one proximity check, ready for the feedback banner
#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct ProximityReport {
    pub kind: FeedbackKind,
    pub message: String,
}

/// Accuracy requested from the host location watcher
#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum WatchAccuracy {
    Low,
    Balanced,
    High,
}

/// Configuration for the host location watcher
#[derive(Clone, Copy, Debug, PartialEq, uniffi::Record)]
pub struct WatchRequest {
    pub accuracy: WatchAccuracy,
    pub distance_interval_m: f64,
}

/// Bridges foreign audio playback into the session's cue seam
struct ForeignCues(Arc<dyn CuePlayer>);

impl qr_hunt::CuePlayer for ForeignCues {
    fn play(&self, cue: qr_hunt::AudioCue) {
        self.0.play(cue.into());
    }
}

#[derive(uniffi::Object)]
pub struct HuntState {
    session: RwLock<HuntSession>,
    cues: ForeignCues,
}

#[uniffi::export]
impl HuntState {
    #[uniffi::constructor]
    pub fn new(target: ScannedTarget, cues: Arc<dyn CuePlayer>) -> Self {
        let name = if target.name.is_empty() {
            FALLBACK_TARGET_NAME
        } else {
            target.name.as_str()
        };
        let target = Target::new(name, Point::new(target.longitude, target.latitude));

        info!(name = %target.name, "hunt started");

        Self {
            session: RwLock::new(HuntSession::new(target)),
            cues: ForeignCues(cues),
        }
    }

    /// Record one fix from the host location watcher
    pub async fn update_position(&self, fix: PositionFix) {
        self.session
            .write()
            .await
            .record_fix(Point::new(fix.longitude, fix.latitude));
    }

    /// Latest fix the session has seen, if any
    pub async fn current_position(&self) -> Option<PositionFix> {
        self.session.read().await.current_fix().map(|fix| PositionFix {
            latitude: fix.y(),
            longitude: fix.x(),
        })
    }

    /// Run one proximity check against the latest fix.
    ///
    /// Plays the matching cue through the foreign player and returns the
    /// banner text. `None` means no fix has arrived yet. Once the report
    /// says `Found`, the host shows the victory dialog and stops checking.
    pub async fn check_proximity(&self) -> Option<ProximityReport> {
        let mut session = self.session.write().await;
        let feedback = session.check_proximity(&self.cues)?;

        Some(ProximityReport {
            kind: feedback.into(),
            message: feedback.message().to_owned(),
        })
    }

    pub async fn is_found(&self) -> bool {
        self.session.read().await.phase() == HuntPhase::Found
    }

    /// The destination this hunt is tracking
    pub async fn target(&self) -> ScannedTarget {
        self.session.read().await.target().clone().into()
    }

    /// Watcher configuration the host should use while this hunt is active
    pub fn watch_settings(&self) -> WatchRequest {
        let settings = WatchSettings::default();
        WatchRequest {
            accuracy: match settings.accuracy {
                FixAccuracy::Low => WatchAccuracy::Low,
                FixAccuracy::Balanced => WatchAccuracy::Balanced,
                FixAccuracy::High => WatchAccuracy::High,
            },
            distance_interval_m: settings.distance_interval_m,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingCues {
        played: Mutex<Vec<AudioCue>>,
    }

    impl CuePlayer for RecordingCues {
        fn play(&self, cue: AudioCue) {
            self.played.lock().unwrap().push(cue);
        }
    }

    fn target() -> ScannedTarget {
        ScannedTarget {
            latitude: 40.7505,
            longitude: -73.9935,
            name: "Penn Station".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_check_before_first_fix() {
        let state = HuntState::new(target(), Arc::new(RecordingCues::default()));
        assert_eq!(state.check_proximity().await, None);
    }

    #[tokio::test]
    async fn test_victory_at_the_target() {
        let cues = Arc::new(RecordingCues::default());
        let state = HuntState::new(target(), cues.clone());

        state
            .update_position(PositionFix {
                latitude: 40.7505,
                longitude: -73.9935,
            })
            .await;

        let report = state.check_proximity().await.unwrap();
        assert_eq!(report.kind, FeedbackKind::Found);
        assert_eq!(report.message, "You found it!");
        assert!(state.is_found().await);
        assert_eq!(*cues.played.lock().unwrap(), vec![AudioCue::Victory]);
    }

    #[tokio::test]
    async fn test_warmer_colder_over_successive_fixes() {
        let cues = Arc::new(RecordingCues::default());
        let state = HuntState::new(target(), cues.clone());

        // Roughly 1.7 km out, then 850 m, then back out again
        for (lon, expected) in [
            (-74.0135, FeedbackKind::NoBaseline),
            (-74.0035, FeedbackKind::Warmer),
            (-74.0135, FeedbackKind::Colder),
        ] {
            state
                .update_position(PositionFix {
                    latitude: 40.7505,
                    longitude: lon,
                })
                .await;
            let report = state.check_proximity().await.unwrap();
            assert_eq!(report.kind, expected);
        }

        assert!(!state.is_found().await);
        assert_eq!(
            *cues.played.lock().unwrap(),
            vec![AudioCue::Warmer, AudioCue::Colder]
        );
    }

    #[tokio::test]
    async fn test_empty_name_falls_back() {
        let state = HuntState::new(
            ScannedTarget {
                latitude: 40.7505,
                longitude: -73.9935,
                name: String::new(),
            },
            Arc::new(RecordingCues::default()),
        );

        assert_eq!(state.target().await.name, FALLBACK_TARGET_NAME);
    }

    #[test]
    fn test_watch_settings_defaults() {
        let state = HuntState::new(target(), Arc::new(RecordingCues::default()));
        let request = state.watch_settings();

        assert_eq!(request.accuracy, WatchAccuracy::High);
        assert_eq!(request.distance_interval_m, 1.0);
    }
}
