//! Log routing for the host platform.
//!
//! On Android, events go to logcat under a fixed tag; elsewhere they fall
//! back to stderr. Only this workspace's modules are forwarded.

use std::sync::Once;

#[cfg(target_os = "android")]
fn init_subscriber() {
    use tracing_logcat::{LogcatMakeWriter, LogcatTag};
    use tracing_subscriber::{
        filter::FilterFn, fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt,
    };

    let tag = LogcatTag::Fixed("QrHunt-Rust".to_owned());
    let writer = LogcatMakeWriter::new(tag).expect("Failed to initialize logcat writer");
    let filter = FilterFn::new(|en| en.module_path().unwrap_or_default().starts_with("qr_hunt"));
    let layer = tracing_subscriber::fmt::layer()
        .event_format(Format::default().with_level(false).without_time())
        .with_writer(writer)
        .with_ansi(false);
    tracing_subscriber::registry().with(layer).with(filter).init();
}

#[cfg(not(target_os = "android"))]
fn init_subscriber() {
    use tracing_subscriber::{filter::FilterFn, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = FilterFn::new(|en| en.module_path().unwrap_or_default().starts_with("qr_hunt"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

/// Route library logs to the platform logger. Safe to call more than once.
#[uniffi::export]
pub fn init_logging() {
    static LOGGING_SETUP: Once = Once::new();

    LOGGING_SETUP.call_once(init_subscriber);
}
