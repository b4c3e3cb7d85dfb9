//! Shared recording doubles for the integration tests.
//!
//! The triage pipeline only talks to the outside world through its sink
//! and host seams, so the tests observe it by swapping both for recorders.

#![allow(dead_code)]

use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use vktriage::{DebugHost, LogSink, LOG_TARGET};

/// Log sink that records every routed line instead of logging it.
#[derive(Default)]
pub struct RecordingSink {
    errors: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().clone()
    }

    /// Lines in the warning channel that are spam notices rather than
    /// formatted diagnostics.
    pub fn spam_notices(&self) -> usize {
        self.warnings
            .lock()
            .iter()
            .filter(|line| line.starts_with("Too many validation messages"))
            .count()
    }
}

impl LogSink for RecordingSink {
    fn error(&self, target: &str, line: &str) {
        assert_eq!(target, LOG_TARGET);
        self.errors.lock().push(line.to_string());
    }

    fn warning(&self, target: &str, line: &str) {
        assert_eq!(target, LOG_TARGET);
        self.warnings.lock().push(line.to_string());
    }
}

/// Debug host that records every primitive the pipeline touches.
pub struct RecordingHost {
    attached: bool,
    output: Mutex<Vec<String>>,
    breaks: AtomicUsize,
    alerts: Mutex<Vec<(String, String)>>,
}

impl RecordingHost {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new(false))
    }

    pub fn shared_attached() -> Arc<Self> {
        Arc::new(Self::new(true))
    }

    fn new(attached: bool) -> Self {
        Self {
            attached,
            output: Mutex::new(Vec::new()),
            breaks: AtomicUsize::new(0),
            alerts: Mutex::new(Vec::new()),
        }
    }

    pub fn output_lines(&self) -> Vec<String> {
        self.output.lock().clone()
    }

    pub fn break_count(&self) -> usize {
        self.breaks.load(Ordering::SeqCst)
    }

    pub fn alerts(&self) -> Vec<(String, String)> {
        self.alerts.lock().clone()
    }
}

impl DebugHost for RecordingHost {
    fn output(&self, line: &str) {
        self.output.lock().push(line.to_string());
    }

    fn debugger_attached(&self) -> bool {
        self.attached
    }

    fn break_into_debugger(&self) {
        self.breaks.fetch_add(1, Ordering::SeqCst);
    }

    fn alert(&self, title: &str, body: &str) {
        self.alerts.lock().push((title.to_string(), body.to_string()));
    }
}
