//! Console Logging
//!
//! Routes `tracing` events to the browser console, using the `console.*`
//! method that matches each event's level.

use ease_journal::LoggingConfig;
use tracing_web::MakeWebConsoleWriter;

/// Install the global subscriber. Call once, before mounting.
pub fn init(config: &LoggingConfig) {
    tracing_subscriber::fmt()
        .with_writer(MakeWebConsoleWriter::new())
        .with_max_level(config.max_level())
        // No clock on wasm32-unknown-unknown; the console timestamps lines itself
        .without_time()
        .with_ansi(false)
        .init();
}
