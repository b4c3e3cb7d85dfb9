//! Diagnostic events and their classification.
//!
//! The validation layer reports severity and message type as bit sets that
//! may carry more than one bit. Everything downstream wants a single
//! dominant level and category, so classification runs once, over a fixed
//! priority table, and the rest of the crate only ever sees the small
//! [`Severity`] and [`Category`] enums.

use ash::vk;
use std::fmt;

/// Dominant severity of a diagnostic, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Verbose,
}

/// Severity bits in the order they win; the first set bit decides.
const SEVERITY_PRIORITY: [(vk::DebugUtilsMessageSeverityFlagsEXT, Severity); 4] = [
    (vk::DebugUtilsMessageSeverityFlagsEXT::ERROR, Severity::Error),
    (
        vk::DebugUtilsMessageSeverityFlagsEXT::WARNING,
        Severity::Warning,
    ),
    (vk::DebugUtilsMessageSeverityFlagsEXT::INFO, Severity::Info),
    (
        vk::DebugUtilsMessageSeverityFlagsEXT::VERBOSE,
        Severity::Verbose,
    ),
];

impl Severity {
    /// Picks the dominant severity out of a bit set, or `None` when no
    /// known bit is present. Labels are never combined.
    pub fn classify(flags: vk::DebugUtilsMessageSeverityFlagsEXT) -> Option<Self> {
        SEVERITY_PRIORITY
            .iter()
            .find(|(bit, _)| flags.contains(*bit))
            .map(|&(_, level)| level)
    }

    /// Tag used in formatted lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Verbose => "VERBOSE",
        }
    }
}

/// Dominant message category, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Performance,
    General,
    Validation,
}

/// Category bits in the order they win; the first set bit decides.
const CATEGORY_PRIORITY: [(vk::DebugUtilsMessageTypeFlagsEXT, Category); 3] = [
    (
        vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE,
        Category::Performance,
    ),
    (vk::DebugUtilsMessageTypeFlagsEXT::GENERAL, Category::General),
    (
        vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION,
        Category::Validation,
    ),
];

impl Category {
    /// Picks the dominant category out of a bit set, or `None` when no
    /// known bit is present.
    pub fn classify(flags: vk::DebugUtilsMessageTypeFlagsEXT) -> Option<Self> {
        CATEGORY_PRIORITY
            .iter()
            .find(|(bit, _)| flags.contains(*bit))
            .map(|&(_, category)| category)
    }

    /// Tag used in formatted lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Performance => "perf",
            Category::General => "general",
            Category::Validation => "validation",
        }
    }
}

/// One diagnostic as reported by the validation layer.
///
/// Borrowed, immutable, and only alive for the duration of the callback
/// that carries it. `message_id` is stable across runs for the same
/// validation rule, which is what the deny-list and the spam counter key
/// on.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticEvent<'a> {
    /// Raw severity bits as reported by the driver.
    pub severity: vk::DebugUtilsMessageSeverityFlagsEXT,
    /// Raw message-type bits as reported by the driver.
    pub message_types: vk::DebugUtilsMessageTypeFlagsEXT,
    /// Numeric id of the validation rule that fired.
    pub message_id: i32,
    /// Human-readable description.
    pub message: &'a str,
}

impl<'a> DiagnosticEvent<'a> {
    pub fn new(
        severity: vk::DebugUtilsMessageSeverityFlagsEXT,
        message_types: vk::DebugUtilsMessageTypeFlagsEXT,
        message_id: i32,
        message: &'a str,
    ) -> Self {
        Self {
            severity,
            message_types,
            message_id,
            message,
        }
    }

    /// Dominant severity, if any known bit is set.
    pub fn level(&self) -> Option<Severity> {
        Severity::classify(self.severity)
    }

    /// Dominant category, if any known bit is set.
    pub fn category(&self) -> Option<Category> {
        Category::classify(self.message_types)
    }
}

/// The canonical one-line form: `SEVERITY(category:id) text` plus a
/// trailing newline. An unknown severity omits the tag, an unknown
/// category leaves its slot empty; the surrounding punctuation stays.
impl fmt::Display for DiagnosticEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(level) = self.level() {
            f.write_str(level.as_str())?;
        }
        f.write_str("(")?;
        if let Some(category) = self.category() {
            f.write_str(category.as_str())?;
        }
        writeln!(f, ":{}) {}", self.message_id, self.message)
    }
}
