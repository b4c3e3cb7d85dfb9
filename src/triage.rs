//! The triage pipeline for validation messages.
//!
//! One [`ValidationTriage`] sits between the driver's validation layer and
//! the application's logging. For every event it decides, in order:
//! deny-listed ids are dropped outright; everything else is counted (with
//! a spam warning once an id gets loud), formatted into a single line,
//! mirrored to the platform debug-output stream, optionally escalated to a
//! debugger break or a modal alert, and finally routed to the log sink at
//! error or warning level.
//!
//! Whatever happens, the triggering Vulkan call is never aborted: an
//! application must behave exactly as it would without validation layers.

use crate::counts::MessageCounts;
use crate::denylist;
use crate::event::{Category, DiagnosticEvent, Severity};
use crate::host::{platform_host, DebugHost};
use crate::sink::{LogCrateSink, LogSink, LOG_TARGET};

/// Once an id has fired this many times, every further occurrence logs a
/// spam warning alongside the message itself.
pub const SPAM_THRESHOLD: u32 = 10;

/// Title of the modal alert shown for error events.
const ALERT_TITLE: &str = "Alert";

/// Caller-supplied switches for the interactive debugging aids. Supplied
/// once at registration time and never mutated by the triage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriageOptions {
    /// Break into an attached debugger on error-severity events.
    pub break_on_error: bool,
    /// Break into an attached debugger on warning-severity events.
    /// Performance-category warnings never break.
    pub break_on_warning: bool,
    /// Show a blocking modal alert with the raw message text on errors,
    /// debugger or not.
    pub alert_on_error: bool,
}

/// What the handler did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The id is on the deny-list; nothing was counted, logged or shown.
    Suppressed,
    /// The event was counted, formatted and routed.
    Reported,
}

impl Disposition {
    /// Whether the driver should abort the call that produced the event.
    /// Always false: validation is diagnostic, not policy-enforcing, and
    /// the application must run exactly as it would without layers.
    pub fn should_abort(self) -> bool {
        false
    }
}

/// Synchronous handler for validation-layer diagnostics.
///
/// One instance serves every thread the driver calls back on; the only
/// mutable state is the per-id occurrence counter, and that is lock
/// guarded. Construction wires up the `log`-crate sink and the platform
/// debug host; both can be swapped with the `with_*` builders, which is
/// also how the tests observe the pipeline.
pub struct ValidationTriage {
    options: TriageOptions,
    counts: MessageCounts,
    sink: Box<dyn LogSink>,
    host: Box<dyn DebugHost>,
}

impl ValidationTriage {
    pub fn new(options: TriageOptions) -> Self {
        Self {
            options,
            counts: MessageCounts::new(),
            sink: Box::new(LogCrateSink),
            host: platform_host(),
        }
    }

    /// Replaces the log sink.
    pub fn with_sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replaces the platform debug host.
    pub fn with_host(mut self, host: impl DebugHost + 'static) -> Self {
        self.host = Box::new(host);
        self
    }

    /// The switches this triage was registered with.
    pub fn options(&self) -> &TriageOptions {
        &self.options
    }

    /// The per-id occurrence counter.
    pub fn counts(&self) -> &MessageCounts {
        &self.counts
    }

    /// Triages one diagnostic event.
    ///
    /// Runs to completion synchronously on the calling thread. The one
    /// way it can stall is the modal alert: with `alert_on_error` set, an
    /// error event blocks this thread until the user dismisses the alert.
    pub fn handle(&self, event: &DiagnosticEvent<'_>) -> Disposition {
        if denylist::is_denied(event.message_id) {
            return Disposition::Suppressed;
        }

        // Counted for every surviving event no matter the severity. The
        // spam warning repeats on every occurrence past the threshold;
        // ids that loud are exactly the ones worth noticing in the log.
        let prior = self.counts.bump(event.message_id);
        if prior > SPAM_THRESHOLD {
            self.sink.warning(
                LOG_TARGET,
                &format!("Too many validation messages with id {}", event.message_id),
            );
        }

        let line = event.to_string();
        let level = event.level();

        self.host.output(&line);
        match level {
            Some(Severity::Error) => {
                if self.options.break_on_error && self.host.debugger_attached() {
                    self.host.break_into_debugger();
                }
                if self.options.alert_on_error {
                    // Raw text, not the formatted line; blocks until
                    // dismissed.
                    self.host.alert(ALERT_TITLE, event.message);
                }
            }
            Some(Severity::Warning) => {
                if self.options.break_on_warning
                    && self.host.debugger_attached()
                    && event.category() != Some(Category::Performance)
                {
                    self.host.break_into_debugger();
                }
            }
            _ => {}
        }

        match level {
            Some(Severity::Error) => self.sink.error(LOG_TARGET, &line),
            _ => self.sink.warning(LOG_TARGET, &line),
        }

        Disposition::Reported
    }
}
