//! Built-in shell commands
//!
//! Every backpack operation the shell offers.

use stash_inventory::{ItemRecord, SearchOutcome, SortKey};

use crate::command::{Command, CommandError, CommandHandler, CommandResult};
use crate::output::{item_detail, item_table, OutputLine};
use crate::session::{SearchKind, Session};

fn table(session: &Session) -> Vec<OutputLine> {
    item_table(
        session.store().as_store().items(),
        session.variant().rank_label(),
    )
}

fn require_name(cmd: &Command) -> Result<String, CommandError> {
    cmd.joined_args()
        .ok_or_else(|| CommandError::MissingArgument("name".to_string()))
}

/// Help command - shows available commands
pub struct HelpCommand {
    /// (usage, description) of every registered command
    commands: Vec<(String, String)>,
}

impl HelpCommand {
    pub fn new(commands: Vec<(String, String)>) -> Self {
        Self { commands }
    }
}

impl CommandHandler for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        "Show available commands"
    }

    fn execute(&self, _cmd: &Command, _session: &mut Session) -> Result<CommandResult, CommandError> {
        let mut result = CommandResult::success().add_line(OutputLine::info("Available commands:"));

        for (usage, desc) in &self.commands {
            result = result.add_line(OutputLine::info(format!("  {:32} - {}", usage, desc)));
        }

        Ok(result)
    }
}

/// Add a new item
pub struct AddCommand;

impl CommandHandler for AddCommand {
    fn name(&self) -> &str {
        "add"
    }

    fn description(&self) -> &str {
        "Put a new item in the backpack"
    }

    fn usage(&self) -> &str {
        "add <name> <category> <rank>"
    }

    fn execute(&self, cmd: &Command, session: &mut Session) -> Result<CommandResult, CommandError> {
        let name = cmd.require_arg(0, "name")?;
        let category = cmd.require_arg(1, "category")?;
        let rank_arg = cmd.require_arg(2, "rank")?;
        if cmd.args.len() > 3 {
            return Err(CommandError::InvalidArguments(
                "too many arguments; quote names that contain spaces".to_string(),
            ));
        }

        let rank: i32 = rank_arg.parse().map_err(|_| {
            CommandError::InvalidArguments(format!("rank must be a whole number, got '{}'", rank_arg))
        })?;

        let record = ItemRecord::for_variant(session.variant(), name, category, rank, session.policy())?;
        let added = record.name().to_string();
        session.store_mut().as_store_mut().insert(record)?;

        Ok(CommandResult::with_message(format!("Item '{}' added", added)).add_lines(table(session)))
    }
}

/// Remove an item by name
pub struct RemoveCommand;

impl CommandHandler for RemoveCommand {
    fn name(&self) -> &str {
        "remove"
    }

    fn description(&self) -> &str {
        "Remove an item by exact name"
    }

    fn usage(&self) -> &str {
        "remove <name>"
    }

    fn execute(&self, cmd: &Command, session: &mut Session) -> Result<CommandResult, CommandError> {
        let name = require_name(cmd)?;
        if session.store().as_store().is_empty() {
            return Ok(CommandResult::failure("Backpack is empty"));
        }

        let removed = session.store_mut().as_store_mut().remove(&name)?;

        Ok(CommandResult::with_message(format!("Item '{}' removed", removed.name()))
            .add_lines(table(session)))
    }
}

/// List all items
pub struct ListCommand;

impl CommandHandler for ListCommand {
    fn name(&self) -> &str {
        "list"
    }

    fn description(&self) -> &str {
        "Show the backpack contents"
    }

    fn usage(&self) -> &str {
        "list [--json]"
    }

    fn execute(&self, cmd: &Command, session: &mut Session) -> Result<CommandResult, CommandError> {
        if cmd.has_option("json") {
            let items: Vec<&ItemRecord> = session.store().as_store().items().collect();
            let data = serde_json::to_value(&items)
                .map_err(|e| CommandError::InvalidArguments(e.to_string()))?;
            return Ok(CommandResult::success().with_data(data));
        }

        let store = session.store().as_store();
        Ok(CommandResult::success()
            .add_line(OutputLine::info(format!(
                "Items in backpack ({}/{}):",
                store.len(),
                store.capacity()
            )))
            .add_lines(table(session)))
    }
}

/// Sequential search by name
pub struct FindCommand;

impl CommandHandler for FindCommand {
    fn name(&self) -> &str {
        "find"
    }

    fn description(&self) -> &str {
        "Sequential search by name"
    }

    fn usage(&self) -> &str {
        "find <name>"
    }

    fn execute(&self, cmd: &Command, session: &mut Session) -> Result<CommandResult, CommandError> {
        let name = require_name(cmd)?;
        if session.store().as_store().is_empty() {
            return Ok(CommandResult::failure("Backpack is empty"));
        }

        let report = session.store().as_store().find(&name);
        session.record_search(SearchKind::Sequential, report);
        Ok(search_result(session, report.outcome, report.comparisons))
    }
}

/// Binary search by name
pub struct BinaryFindCommand;

impl CommandHandler for BinaryFindCommand {
    fn name(&self) -> &str {
        "bfind"
    }

    fn description(&self) -> &str {
        "Binary search by name (sort by name first)"
    }

    fn usage(&self) -> &str {
        "bfind <name>"
    }

    fn execute(&self, cmd: &Command, session: &mut Session) -> Result<CommandResult, CommandError> {
        let name = require_name(cmd)?;

        let report = session.store().backpack("binary search")?.binary_search(&name)?;
        session.record_search(SearchKind::Binary, report);
        Ok(search_result(session, report.outcome, report.comparisons))
    }
}

fn search_result(session: &Session, outcome: SearchOutcome, comparisons: usize) -> CommandResult {
    match outcome {
        SearchOutcome::Found(index) => {
            let mut result =
                CommandResult::with_message(format!("Item found! Comparisons: {}", comparisons));
            if let Some(item) = session.store().as_store().get(index) {
                result = result.add_line(item_detail(item, session.variant().rank_label()));
            }
            result
        }
        SearchOutcome::NotFound => {
            CommandResult::failure(format!("Item not found. Comparisons: {}", comparisons))
        }
    }
}

/// Sort by a field
pub struct SortCommand;

impl CommandHandler for SortCommand {
    fn name(&self) -> &str {
        "sort"
    }

    fn description(&self) -> &str {
        "Sort by name (bubble), category (insertion) or rank (selection)"
    }

    fn usage(&self) -> &str {
        "sort <name|category|rank>"
    }

    fn execute(&self, cmd: &Command, session: &mut Session) -> Result<CommandResult, CommandError> {
        let key_arg = cmd
            .get_option("key")
            .or_else(|| cmd.get_arg(0))
            .ok_or_else(|| CommandError::MissingArgument("key".to_string()))?;
        let key: SortKey = key_arg.parse().map_err(CommandError::InvalidArguments)?;

        let report = session.store_mut().backpack_mut("sorting")?.sort_by(key)?;
        session.record_sort(report);

        Ok(CommandResult::with_message(format!(
            "Sorted by {} ({} sort). Comparisons: {}, time: {:?}",
            report.key, report.strategy, report.comparisons, report.elapsed
        ))
        .add_lines(table(session)))
    }
}

/// Show the last sort and search counters
pub struct StatsCommand;

impl CommandHandler for StatsCommand {
    fn name(&self) -> &str {
        "stats"
    }

    fn description(&self) -> &str {
        "Show comparisons and time of the last sort and search"
    }

    fn execute(&self, _cmd: &Command, session: &mut Session) -> Result<CommandResult, CommandError> {
        let mut result = CommandResult::success();

        result = match session.last_sort() {
            Some(report) => result.add_line(OutputLine::info(format!(
                "Last sort:   {} by {} - {} comparisons in {:?}",
                report.strategy, report.key, report.comparisons, report.elapsed
            ))),
            None => result.add_line(OutputLine::warning("No sort has run yet")),
        };

        result = match session.last_search() {
            Some((kind, report)) => {
                let outcome = match report.outcome {
                    SearchOutcome::Found(index) => format!("found at {}", index),
                    SearchOutcome::NotFound => "not found".to_string(),
                };
                result.add_line(OutputLine::info(format!(
                    "Last search: {} - {} after {} comparisons",
                    kind, outcome, report.comparisons
                )))
            }
            None => result.add_line(OutputLine::warning("No search has run yet")),
        };

        Ok(result)
    }
}

/// Show the session state
pub struct StatusCommand;

impl CommandHandler for StatusCommand {
    fn name(&self) -> &str {
        "status"
    }

    fn description(&self) -> &str {
        "Show store, variant, fill level and sort order"
    }

    fn execute(&self, _cmd: &Command, session: &mut Session) -> Result<CommandResult, CommandError> {
        let store = session.store();
        let sort_key = match store.backpack("status") {
            Ok(backpack) => backpack.sort_key().to_string(),
            Err(_) => "n/a".to_string(),
        };

        Ok(CommandResult::success()
            .add_line(OutputLine::info(format!("Store:    {}", store.kind())))
            .add_line(OutputLine::info(format!("Variant:  {}", session.variant())))
            .add_line(OutputLine::info(format!(
                "Items:    {}/{}",
                store.as_store().len(),
                store.as_store().capacity()
            )))
            .add_line(OutputLine::info(format!("Sorted by: {}", sort_key))))
    }
}

/// Empty the backpack
pub struct ClearCommand;

impl CommandHandler for ClearCommand {
    fn name(&self) -> &str {
        "clear"
    }

    fn description(&self) -> &str {
        "Remove every item"
    }

    fn execute(&self, _cmd: &Command, session: &mut Session) -> Result<CommandResult, CommandError> {
        session.store_mut().as_store_mut().clear();
        Ok(CommandResult::with_message("Backpack emptied"))
    }
}

/// Leave the shell
pub struct QuitCommand;

impl CommandHandler for QuitCommand {
    fn name(&self) -> &str {
        "quit"
    }

    fn description(&self) -> &str {
        "Leave the shell"
    }

    fn execute(&self, _cmd: &Command, session: &mut Session) -> Result<CommandResult, CommandError> {
        session.stop();
        Ok(CommandResult::with_message("Bye!"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Store, StoreKind};
    use stash_inventory::{LengthPolicy, Variant};

    fn session(kind: StoreKind) -> Session {
        Session::new(Store::new(kind, 3).unwrap(), Variant::Loot, LengthPolicy::Reject)
    }

    fn add(session: &mut Session, name: &str, category: &str, rank: &str) -> Result<CommandResult, CommandError> {
        let cmd = Command::new("add").arg(name).arg(category).arg(rank);
        AddCommand.execute(&cmd, session)
    }

    #[test]
    fn test_add_and_list() {
        let mut session = session(StoreKind::Array);
        let result = add(&mut session, "AK-47", "arma", "2").unwrap();

        assert!(result.is_success());
        // Header plus one row
        assert_eq!(result.output_lines().len(), 2);

        let listed = ListCommand.execute(&Command::new("list"), &mut session).unwrap();
        assert!(listed.output_lines()[0].text().contains("1/3"));
    }

    #[test]
    fn test_add_rejects_bad_rank() {
        let mut session = session(StoreKind::Array);
        assert!(matches!(
            add(&mut session, "Faca", "arma", "muitas"),
            Err(CommandError::InvalidArguments(_))
        ));
        assert!(matches!(
            add(&mut session, "Faca", "arma", "-2"),
            Err(CommandError::Inventory(_))
        ));
    }

    #[test]
    fn test_add_when_full() {
        let mut session = session(StoreKind::Linked);
        for name in ["a", "b", "c"] {
            add(&mut session, name, "x", "1").unwrap();
        }
        let err = add(&mut session, "d", "x", "1").unwrap_err();
        assert_eq!(err.to_string(), "Backpack is full (capacity 3)");
    }

    #[test]
    fn test_remove_on_empty() {
        let mut session = session(StoreKind::Array);
        let result = RemoveCommand
            .execute(&Command::new("remove").arg("Faca"), &mut session)
            .unwrap();
        assert!(!result.is_success());
        assert_eq!(result.message(), Some("Backpack is empty"));
    }

    #[test]
    fn test_find_records_search() {
        let mut session = session(StoreKind::Array);
        add(&mut session, "Kit Médico", "cura", "1").unwrap();

        let cmd = Command::new("find").arg("Kit").arg("Médico");
        let result = FindCommand.execute(&cmd, &mut session).unwrap();

        assert_eq!(result.message(), Some("Item found! Comparisons: 1"));
        assert_eq!(
            session.last_search().map(|(kind, _)| *kind),
            Some(SearchKind::Sequential)
        );
    }

    #[test]
    fn test_bfind_requires_sort() {
        let mut session = session(StoreKind::Array);
        add(&mut session, "Kit", "cura", "1").unwrap();

        let cmd = Command::new("bfind").arg("Kit");
        let err = BinaryFindCommand.execute(&cmd, &mut session).unwrap_err();
        assert!(err.to_string().contains("sorted by name"));

        SortCommand
            .execute(&Command::new("sort").arg("name"), &mut session)
            .unwrap();
        let result = BinaryFindCommand.execute(&cmd, &mut session).unwrap();
        assert!(result.is_success());
    }

    #[test]
    fn test_sort_unsupported_on_linked() {
        let mut session = session(StoreKind::Linked);
        let err = SortCommand
            .execute(&Command::new("sort").arg("rank"), &mut session)
            .unwrap_err();
        assert!(matches!(err, CommandError::Unsupported { .. }));
    }

    #[test]
    fn test_sort_records_stats() {
        let mut session = session(StoreKind::Array);
        add(&mut session, "B", "x", "1").unwrap();
        add(&mut session, "A", "x", "2").unwrap();

        let result = SortCommand
            .execute(&Command::new("sort").arg("nome"), &mut session)
            .unwrap();
        assert!(result.message().unwrap().contains("Comparisons: 1"));
        assert_eq!(session.last_sort().map(|r| r.comparisons), Some(1));

        let stats = StatsCommand.execute(&Command::new("stats"), &mut session).unwrap();
        assert!(stats.output_lines()[0].text().contains("bubble by name"));
    }

    #[test]
    fn test_quit_stops_session() {
        let mut session = session(StoreKind::Array);
        QuitCommand.execute(&Command::new("quit"), &mut session).unwrap();
        assert!(!session.is_running());
    }
}
