//! Command representation
//!
//! Defines the command structure, handler trait and results.

use std::collections::HashMap;

use stash_inventory::InventoryError;

use crate::output::{Output, OutputLine};
use crate::session::Session;

/// Command error
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Not supported by the {store} store: {operation}")]
    Unsupported { store: String, operation: String },

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// A parsed command
#[derive(Debug, Clone)]
pub struct Command {
    /// Command name
    pub name: String,
    /// Positional arguments
    pub args: Vec<String>,
    /// Named options (--key=value or --flag)
    pub options: HashMap<String, Option<String>>,
    /// Input text after the command name, as typed
    pub raw_args: Option<String>,
}

impl Command {
    /// Create a new command
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            options: HashMap::new(),
            raw_args: None,
        }
    }

    /// Add a positional argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Check if an option is set
    pub fn has_option(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Get option value
    pub fn get_option(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(|v| v.as_deref())
    }

    /// Get argument at index
    pub fn get_arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(|s| s.as_str())
    }

    /// Get required argument
    pub fn require_arg(&self, index: usize, name: &str) -> Result<&str, CommandError> {
        self.get_arg(index)
            .ok_or_else(|| CommandError::MissingArgument(name.to_string()))
    }

    /// All positional arguments as one name
    ///
    /// Lets `find Kit Medico` work without quotes. When the arguments were
    /// plain words the typed text is used as is, so inner runs of spaces
    /// survive.
    pub fn joined_args(&self) -> Option<String> {
        if self.args.is_empty() {
            return None;
        }

        if let Some(raw) = self.raw_args.as_deref() {
            if raw.split_whitespace().eq(self.args.iter().map(String::as_str)) {
                return Some(raw.to_string());
            }
        }
        Some(self.args.join(" "))
    }
}

/// Result of command execution
#[derive(Debug, Clone, Default)]
pub struct CommandResult {
    /// Success status
    success: bool,
    /// Main message
    message: Option<String>,
    /// Output lines
    output: Vec<OutputLine>,
    /// Structured data (for --json)
    data: Option<serde_json::Value>,
}

impl CommandResult {
    /// Create a successful result
    pub fn success() -> Self {
        Self {
            success: true,
            message: None,
            output: Vec::new(),
            data: None,
        }
    }

    /// Create a failure result
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            output: Vec::new(),
            data: None,
        }
    }

    /// Create result with message
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            output: Vec::new(),
            data: None,
        }
    }

    /// Add output line
    pub fn add_line(mut self, line: OutputLine) -> Self {
        self.output.push(line);
        self
    }

    /// Add multiple output lines
    pub fn add_lines(mut self, lines: Vec<OutputLine>) -> Self {
        self.output.extend(lines);
        self
    }

    /// Set structured data
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Check if successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get message
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Get output lines
    pub fn output_lines(&self) -> &[OutputLine] {
        &self.output
    }

    /// Flatten into printable output
    pub fn to_output(&self) -> Output {
        let mut output = Output::new();

        if let Some(message) = &self.message {
            if self.success {
                output.add_success(message.clone());
            } else {
                output.add_error(message.clone());
            }
        }
        for line in &self.output {
            output.add_line(line.clone());
        }
        if let Some(data) = &self.data {
            let text = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
            output.add_info(text);
        }

        output
    }
}

/// Command handler trait
pub trait CommandHandler {
    /// Get the command name
    fn name(&self) -> &str;

    /// Get command description
    fn description(&self) -> &str;

    /// Get usage string
    fn usage(&self) -> &str {
        self.name()
    }

    /// Execute the command
    fn execute(&self, cmd: &Command, session: &mut Session) -> Result<CommandResult, CommandError>;
}
