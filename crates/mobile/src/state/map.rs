//! Map camera state for the hunt screen.
//!
//! The map widget itself lives on the host; this side only decides where
//! the camera should sit and how wide the view should be.

use tokio::sync::RwLock;

use crate::state::hunt::PositionFix;

/// Default camera span around the user, in degrees
const DEFAULT_SPAN_DEG: f64 = 0.005;

/// Radius of the accuracy circle drawn around the user, in meters
const ACCURACY_CIRCLE_RADIUS_M: f64 = 20.0;

/// A camera region for the host map widget
#[derive(Clone, Copy, Debug, PartialEq, uniffi::Record)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

fn region_around(fix: PositionFix) -> MapRegion {
    MapRegion {
        latitude: fix.latitude,
        longitude: fix.longitude,
        latitude_delta: DEFAULT_SPAN_DEG,
        longitude_delta: DEFAULT_SPAN_DEG,
    }
}

/// Radius of the accuracy circle the host draws around the user marker
#[uniffi::export]
pub fn accuracy_circle_radius_m() -> f64 {
    ACCURACY_CIRCLE_RADIUS_M
}

#[derive(Default, uniffi::Object)]
pub struct MapViewState {
    region: RwLock<Option<MapRegion>>,
}

#[uniffi::export]
impl MapViewState {
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self::default()
    }

    /// Region for the initial camera, centered on the first fix
    pub async fn initial_region(&self, fix: PositionFix) -> MapRegion {
        let region = region_around(fix);
        *self.region.write().await = Some(region);
        region
    }

    /// Region to animate to when the user taps "Center on Me"
    pub async fn center_on_user(&self, fix: PositionFix) -> MapRegion {
        let region = region_around(fix);
        *self.region.write().await = Some(region);
        region
    }

    /// Last region handed to the host, if any
    pub async fn last_region(&self) -> Option<MapRegion> {
        *self.region.read().await
    }
}
