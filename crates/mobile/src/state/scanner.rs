//! QR scanning screen state: parse one code, then latch until re-armed.

use std::sync::atomic::{AtomicBool, Ordering};

use qr_hunt::models::types::in_geographic_range;
use qr_hunt::payload::parse_target;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum ScanError {
    #[error("{0}")]
    InvalidGeoUri(String),
    #[error("{0}")]
    MalformedPayload(String),
    #[error("missing location coordinates")]
    MissingCoordinates,
}

impl From<qr_hunt::ScanError> for ScanError {
    fn from(err: qr_hunt::ScanError) -> Self {
        match err {
            qr_hunt::ScanError::InvalidGeoUri(uri) => Self::InvalidGeoUri(uri),
            qr_hunt::ScanError::MalformedPayload(detail) => Self::MalformedPayload(detail),
            qr_hunt::ScanError::MissingCoordinates => Self::MissingCoordinates,
        }
    }
}

/// Parsed hunt destination handed from the scanner screen to the hunt screen
#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct ScannedTarget {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

impl From<qr_hunt::Target> for ScannedTarget {
    fn from(target: qr_hunt::Target) -> Self {
        Self {
            latitude: target.location.y(),
            longitude: target.location.x(),
            name: target.name.to_string(),
        }
    }
}

#[derive(Debug, Default, uniffi::Object)]
pub struct ScannerState {
    scanned: AtomicBool,
}

#[uniffi::export]
impl ScannerState {
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self::default()
    }

    /// True until a code has been handled. The host stops delivering
    /// barcode events while this is false, exactly like disabling the
    /// camera callback.
    pub fn armed(&self) -> bool {
        !self.scanned.load(Ordering::Acquire)
    }

    /// Parse one decoded barcode payload into a hunt target.
    ///
    /// Latches the scanner whether or not parsing succeeds; on failure the
    /// host shows the error, stays on the scanner screen, and calls
    /// [`Self::reset`] to allow another attempt.
    pub fn handle_scan(&self, payload: String) -> Result<ScannedTarget, ScanError> {
        self.scanned.store(true, Ordering::Release);

        let target = parse_target(&payload)?;

        if !in_geographic_range(target.location) {
            warn!(name = %target.name, "scanned target is outside geographic bounds");
        }
        debug!(name = %target.name, "scan parsed");

        Ok(target.into())
    }

    /// Re-arm the scanner for another code ("New Game", or after an error)
    pub fn reset(&self) {
        self.scanned.store(false, Ordering::Release);
    }
}
