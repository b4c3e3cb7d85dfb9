//! # vktriage
//!
//! Triage for Vulkan validation-layer diagnostics, wired in through a
//! `VK_EXT_debug_utils` messenger.
//!
//! Validation layers are invaluable and noisy at the same time: some
//! diagnostics are known false positives, some fire thousands of times a
//! frame, and all of them arrive on whatever thread the driver happens to
//! be on. This crate filters known-benign message ids, throttles repeat
//! offenders, formats each surviving report into a single line, routes it
//! to the `log` facade at error or warning level, and can break into an
//! attached debugger or raise a modal alert on developer machines.
//!
//! ## Architecture
//!
//! - `event`: the incoming diagnostic shape plus severity/category
//!   classification
//! - `denylist`: fixed table of known-benign message ids
//! - `counts`: per-id occurrence counting for spam suppression
//! - `triage`: the handler pipeline
//! - `sink`: outbound logging seam with a `log`-crate default
//! - `host`: platform debug aids (debugger break, modal alert)
//! - `messenger`: the raw callback and the `ash`-based installer
//!
//! ## Usage
//!
//! Handling events directly:
//!
//! ```rust
//! use ash::vk;
//! use vktriage::{DiagnosticEvent, TriageOptions, ValidationTriage};
//!
//! let triage = ValidationTriage::new(TriageOptions::default());
//! let event = DiagnosticEvent::new(
//!     vk::DebugUtilsMessageSeverityFlagsEXT::WARNING,
//!     vk::DebugUtilsMessageTypeFlagsEXT::GENERAL,
//!     42,
//!     "swapchain image acquired without a fence",
//! );
//! let disposition = triage.handle(&event);
//! assert!(!disposition.should_abort());
//! ```
//!
//! Installing on a real instance:
//!
//! ```rust,no_run
//! use vktriage::{DebugMessenger, TriageOptions, ValidationTriage};
//!
//! fn attach(entry: &ash::Entry, instance: &ash::Instance) -> anyhow::Result<DebugMessenger> {
//!     let options = TriageOptions {
//!         break_on_error: true,
//!         ..TriageOptions::default()
//!     };
//!     let messenger = DebugMessenger::install(entry, instance, ValidationTriage::new(options))?;
//!     // Keep the messenger alive for the instance's lifetime and drop it
//!     // before the instance.
//!     Ok(messenger)
//! }
//! ```

pub mod counts;
pub mod denylist;
pub mod event;
pub mod host;
pub mod messenger;
pub mod sink;
pub mod triage;

// Re-export main types for easy access
pub use counts::MessageCounts;
pub use event::{Category, DiagnosticEvent, Severity};
pub use host::{DebugHost, NullDebugHost};
pub use messenger::{debug_utils_callback, DebugMessenger, MessengerError};
pub use sink::{LogCrateSink, LogSink, LOG_TARGET};
pub use triage::{Disposition, TriageOptions, ValidationTriage, SPAM_THRESHOLD};

/// Version information for vktriage
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
