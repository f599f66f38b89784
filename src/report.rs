//! Console reporting with three severities
//!
//! The transfer pipeline narrates its progress through a [`Reporter`]: plain
//! progress lines, success confirmations, and recovered remote rejections.
//! [`ConsoleReporter`] forwards to the `tracing` macros and can be disabled
//! wholesale; [`RecordingReporter`] captures lines for assertions in tests
//! and for embedders that want to collect the narration instead of logging.

use std::sync::Mutex;

/// Line severity used by [`Reporter`] implementations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Plain progress information
    Info,
    /// A step completed successfully
    Success,
    /// A remote rejection that the pipeline recovered from
    Error,
}

/// Sink for the pipeline's three-severity progress narration
pub trait Reporter: Send + Sync {
    /// Report a plain progress line
    fn info(&self, message: &str);

    /// Report a successfully completed step
    fn success(&self, message: &str);

    /// Report a recovered remote rejection
    fn error(&self, message: &str);
}

/// Reporter that forwards every line to the `tracing` macros
///
/// A disabled reporter drops all three severities; there is no buffering and
/// no per-severity switch.
#[derive(Clone, Copy, Debug)]
pub struct ConsoleReporter {
    enabled: bool,
}

impl ConsoleReporter {
    /// Create a console reporter; `enabled = false` silences it entirely
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        if self.enabled {
            tracing::info!("{message}");
        }
    }

    fn success(&self, message: &str) {
        if self.enabled {
            tracing::info!(outcome = "success", "{message}");
        }
    }

    fn error(&self, message: &str) {
        if self.enabled {
            tracing::error!("{message}");
        }
    }
}

/// Reporter that records every line in memory
#[derive(Debug, Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<(Severity, String)>>,
}

impl RecordingReporter {
    /// Create an empty recording reporter
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines in emission order
    pub fn lines(&self) -> Vec<(Severity, String)> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Recorded lines of one severity, in emission order
    pub fn lines_with(&self, severity: Severity) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, line)| line)
            .collect()
    }

    fn push(&self, severity: Severity, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((severity, message.to_string()));
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.push(Severity::Info, message);
    }

    fn success(&self, message: &str) {
        self.push(Severity::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(Severity::Error, message);
    }
}
