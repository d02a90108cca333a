//! Logging bootstrap for the UI.
//!
//! # Design
//! - `tracing` everywhere; a small layer renders events as single lines for the browser console.
//! - The level filter comes from [`LoggingConfig`]; installation fails if a subscriber already exists.

use crate::core::config::ClientConfig;
use anyhow::{Result, anyhow};
use std::fmt::{self, Write as _};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// Logging configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Most verbose level emitted.
    pub level: Level,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: Level::INFO }
    }
}

impl From<&ClientConfig> for LoggingConfig {
    fn from(config: &ClientConfig) -> Self {
        Self {
            level: config.log_level,
        }
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(LevelFilter::from_level(config.level))
        .with(ConsoleLayer::new(console_sink))
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}

/// Receives one rendered line per event.
pub type LineSink = fn(Level, &str);

/// Layer rendering each event as `target: message key=value ...`.
#[derive(Clone, Copy)]
pub struct ConsoleLayer {
    sink: LineSink,
}

impl ConsoleLayer {
    /// Layer writing to `sink`.
    #[must_use]
    pub const fn new(sink: LineSink) -> Self {
        Self { sink }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut line = LineVisitor::default();
        event.record(&mut line);
        (self.sink)(*metadata.level(), &line.finish(metadata.target()));
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn finish(self, target: &str) -> String {
        format!("{target}: {}{}", self.message, self.fields)
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn console_sink(level: Level, line: &str) {
    match level {
        Level::ERROR => gloo::console::error!(line),
        Level::WARN => gloo::console::warn!(line),
        Level::INFO => gloo::console::info!(line),
        _ => gloo::console::debug!(line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(clippy::print_stderr)]
fn console_sink(level: Level, line: &str) {
    eprintln!("{level} {line}");
}
