//! Shell output handling
//!
//! Structured output for shell commands.

use serde::{Deserialize, Serialize};
use stash_inventory::ItemRecord;

/// Output level/severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputLevel {
    /// Normal information
    Info,
    /// Warning message
    Warning,
    /// Error message
    Error,
    /// Success message
    Success,
}

impl OutputLevel {
    /// Get ANSI color code for this level
    pub fn color_code(&self) -> &'static str {
        match self {
            Self::Info => "\x1b[0m",      // Default
            Self::Warning => "\x1b[33m",  // Yellow
            Self::Error => "\x1b[31m",    // Red
            Self::Success => "\x1b[32m",  // Green
        }
    }

    /// Get level prefix
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Info => "",
            Self::Warning => "[WARN]",
            Self::Error => "[ERROR]",
            Self::Success => "[OK]",
        }
    }
}

/// A single line of output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputLine {
    /// Output level
    level: OutputLevel,
    /// Text content
    text: String,
}

impl OutputLine {
    /// Create a new output line
    pub fn new(level: OutputLevel, text: String) -> Self {
        Self { level, text }
    }

    /// Create info line
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(OutputLevel::Info, text.into())
    }

    /// Create error line
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(OutputLevel::Error, text.into())
    }

    /// Create warning line
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(OutputLevel::Warning, text.into())
    }

    /// Create success line
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(OutputLevel::Success, text.into())
    }

    /// Get level
    pub fn level(&self) -> OutputLevel {
        self.level
    }

    /// Get text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Format for terminal (with colors)
    pub fn format_colored(&self) -> String {
        let prefix = self.level.prefix();
        let color = self.level.color_code();
        let reset = "\x1b[0m";

        if prefix.is_empty() {
            format!("{}{}{}", color, self.text, reset)
        } else {
            format!("{}{} {}{}", color, prefix, self.text, reset)
        }
    }

    /// Format plain text (no colors)
    pub fn format_plain(&self) -> String {
        let prefix = self.level.prefix();
        if prefix.is_empty() {
            self.text.clone()
        } else {
            format!("{} {}", prefix, self.text)
        }
    }

    /// Format with or without colors
    pub fn format(&self, color: bool) -> String {
        if color {
            self.format_colored()
        } else {
            self.format_plain()
        }
    }
}

impl std::fmt::Display for OutputLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_plain())
    }
}

/// Collection of output lines
#[derive(Debug, Clone, Default)]
pub struct Output {
    lines: Vec<OutputLine>,
}

impl Output {
    /// Create empty output
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a line
    pub fn add_line(&mut self, line: OutputLine) {
        self.lines.push(line);
    }

    /// Add info line
    pub fn add_info(&mut self, text: impl Into<String>) {
        self.lines.push(OutputLine::info(text));
    }

    /// Add error line
    pub fn add_error(&mut self, text: impl Into<String>) {
        self.lines.push(OutputLine::error(text));
    }

    /// Add success line
    pub fn add_success(&mut self, text: impl Into<String>) {
        self.lines.push(OutputLine::success(text));
    }

    /// Get all lines
    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get line count
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Format all lines
    pub fn format(&self, color: bool) -> String {
        self.lines
            .iter()
            .map(|l| l.format(color))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if any errors
    pub fn has_errors(&self) -> bool {
        self.lines.iter().any(|l| l.level == OutputLevel::Error)
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// Render records as a fixed-width table
///
/// `rank_label` names the third column (quantity or priority).
pub fn item_table<'a>(
    items: impl IntoIterator<Item = &'a ItemRecord>,
    rank_label: &str,
) -> Vec<OutputLine> {
    let mut lines = vec![OutputLine::info(format!(
        "{:<25} {:<15} {:<10}",
        "Name", "Category", rank_label
    ))];

    for item in items {
        lines.push(OutputLine::info(format!(
            "{:<25} {:<15} {:<10}",
            item.name(),
            item.category(),
            item.rank()
        )));
    }

    if lines.len() == 1 {
        return vec![OutputLine::info("(empty backpack)")];
    }
    lines
}

/// Render one record as a detail line
pub fn item_detail(item: &ItemRecord, rank_label: &str) -> OutputLine {
    OutputLine::info(format!(
        "Name: {} | Category: {} | {}: {}",
        item.name(),
        item.category(),
        rank_label,
        item.rank()
    ))
}
