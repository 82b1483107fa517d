//! Command executor
//!
//! Resolves aliases and dispatches parsed commands to their handlers.

use std::collections::HashMap;
use std::sync::Arc;

use crate::builtins;
use crate::command::{Command, CommandError, CommandHandler, CommandResult};
use crate::parser::Parser;
use crate::session::Session;
use crate::ShellError;

/// Command executor
pub struct Executor {
    /// Registered command handlers
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
    /// Command aliases
    aliases: HashMap<String, String>,
    /// Line parser
    parser: Parser,
}

impl Executor {
    /// Create a new executor with built-in commands
    pub fn new() -> Self {
        let mut executor = Self {
            handlers: HashMap::new(),
            aliases: HashMap::new(),
            parser: Parser::new(),
        };

        executor.register(Arc::new(builtins::AddCommand));
        executor.register(Arc::new(builtins::RemoveCommand));
        executor.register(Arc::new(builtins::ListCommand));
        executor.register(Arc::new(builtins::FindCommand));
        executor.register(Arc::new(builtins::BinaryFindCommand));
        executor.register(Arc::new(builtins::SortCommand));
        executor.register(Arc::new(builtins::StatsCommand));
        executor.register(Arc::new(builtins::StatusCommand));
        executor.register(Arc::new(builtins::ClearCommand));
        executor.register(Arc::new(builtins::QuitCommand));

        // Help lists everything registered so far, itself included
        let mut entries: Vec<(String, String)> = executor
            .handlers
            .values()
            .map(|h| (h.usage().to_string(), h.description().to_string()))
            .collect();
        entries.push(("help".to_string(), "Show available commands".to_string()));
        entries.sort();
        executor.register(Arc::new(builtins::HelpCommand::new(entries)));

        executor.add_alias("insert", "add");
        executor.add_alias("rm", "remove");
        executor.add_alias("ls", "list");
        executor.add_alias("?", "help");
        executor.add_alias("exit", "quit");

        executor
    }

    /// Register a command handler
    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) {
        self.handlers.insert(handler.name().to_string(), handler);
    }

    /// Add an alias
    pub fn add_alias(&mut self, alias: &str, target: &str) {
        self.aliases.insert(alias.to_string(), target.to_string());
    }

    /// Execute a command
    pub fn execute(&self, mut cmd: Command, session: &mut Session) -> Result<CommandResult, CommandError> {
        if let Some(target) = self.aliases.get(&cmd.name) {
            cmd.name = target.clone();
        }

        let handler = self
            .handlers
            .get(&cmd.name)
            .cloned()
            .ok_or_else(|| CommandError::UnknownCommand(cmd.name.clone()))?;

        log::debug!("Executing '{}' with {} args", cmd.name, cmd.args.len());
        handler.execute(&cmd, session)
    }

    /// Parse and execute one input line
    ///
    /// Blank lines and `#` comments yield `Ok(None)`.
    pub fn execute_line(&self, input: &str, session: &mut Session) -> Result<Option<CommandResult>, ShellError> {
        let input = input.trim();
        if input.is_empty() || input.starts_with('#') {
            return Ok(None);
        }

        let cmd = self.parser.parse(input)?;
        Ok(Some(self.execute(cmd, session)?))
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Store, StoreKind};
    use stash_inventory::{LengthPolicy, Variant};

    fn session() -> Session {
        Session::new(Store::new(StoreKind::Array, 5).unwrap(), Variant::Loot, LengthPolicy::Reject)
    }

    #[test]
    fn test_executor_creation() {
        let executor = Executor::new();
        assert_eq!(executor.handlers.len(), 11);
        assert_eq!(executor.aliases.len(), 5);
    }

    #[test]
    fn test_builtin_help() {
        let executor = Executor::new();
        let result = executor.execute(Command::new("help"), &mut session()).unwrap();
        // Header plus one line per command
        assert_eq!(result.output_lines().len(), 12);
    }

    #[test]
    fn test_unknown_command() {
        let executor = Executor::new();
        let result = executor.execute(Command::new("nonexistent"), &mut session());
        assert!(matches!(result, Err(CommandError::UnknownCommand(_))));
    }

    #[test]
    fn test_alias_resolution() {
        let executor = Executor::new();
        let mut session = session();

        executor
            .execute_line("insert \"Kit Médico\" cura 1", &mut session)
            .unwrap();
        assert_eq!(session.store().as_store().len(), 1);

        executor.execute_line("rm Kit Médico", &mut session).unwrap();
        assert!(session.store().as_store().is_empty());
    }

    #[test]
    fn test_blank_and_comment_lines() {
        let executor = Executor::new();
        let mut session = session();

        assert!(executor.execute_line("   ", &mut session).unwrap().is_none());
        assert!(executor.execute_line("# note", &mut session).unwrap().is_none());
    }

    #[test]
    fn test_parse_error_surfaces() {
        let executor = Executor::new();
        let result = executor.execute_line("add \"Kit", &mut session());
        assert!(matches!(result, Err(ShellError::Parse(_))));
    }
}
