//! Non-interactive command dispatch over the query engine. One command per
//! invocation; `--json` switches every command to raw response output.

pub mod commands;
pub mod output;

use std::env;
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

use crate::core::engine::InsightsEngine;
use crate::errors::InsightsError;
use crate::storage::JsonStorage;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] InsightsError),
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

pub type CommandResult = Result<(), CliError>;

pub type CommandHandler = fn(&mut CliSession, &[String]) -> CommandResult;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

pub const COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        name: "profile",
        description: "Show the customer profile",
        usage: "profile [--customer <id>]",
        handler: commands::profile,
    },
    CommandEntry {
        name: "summary",
        description: "Spending summary for a period",
        usage: "summary [--period 7d|30d|90d|1y]",
        handler: commands::summary,
    },
    CommandEntry {
        name: "categories",
        description: "Category breakdown for a period or custom range",
        usage: "categories [--period <token>] [--start YYYY-MM-DD --end YYYY-MM-DD]",
        handler: commands::categories,
    },
    CommandEntry {
        name: "trends",
        description: "Monthly spending trends",
        usage: "trends [--months <n>]",
        handler: commands::trends,
    },
    CommandEntry {
        name: "transactions",
        description: "List transactions with filters and paging",
        usage: "transactions [--category <name>] [--start <date>] [--end <date>] [--sort <key>] [--limit <n>] [--offset <n>]",
        handler: commands::transactions,
    },
    CommandEntry {
        name: "goals",
        description: "Show budget goals",
        usage: "goals",
        handler: commands::goals,
    },
    CommandEntry {
        name: "filters",
        description: "Show filter metadata",
        usage: "filters",
        handler: commands::filters,
    },
    CommandEntry {
        name: "help",
        description: "List available commands",
        usage: "help",
        handler: commands::help,
    },
    CommandEntry {
        name: "version",
        description: "Print the version",
        usage: "version",
        handler: commands::version,
    },
];

/// Per-invocation state: global flags plus the lazily loaded engine.
pub struct CliSession {
    data_path: Option<PathBuf>,
    json: bool,
    engine: Option<InsightsEngine>,
}

impl CliSession {
    pub fn new(data_path: Option<PathBuf>, json: bool) -> Self {
        Self {
            data_path,
            json,
            engine: None,
        }
    }

    pub fn json(&self) -> bool {
        self.json
    }

    /// Loads the dataset on first use so `help`/`version` never touch disk.
    pub fn engine(&mut self) -> Result<&InsightsEngine, CliError> {
        let engine = match &mut self.engine {
            Some(engine) => engine,
            slot => {
                let storage = JsonStorage::new(self.data_path.clone());
                let loaded = InsightsEngine::from_source(&storage)?;
                slot.insert(loaded)
            }
        };
        Ok(engine)
    }
}

pub fn run_cli() -> CommandResult {
    let args: Vec<String> = env::args().skip(1).collect();
    run_with_args(&args)
}

pub fn run_with_args(args: &[String]) -> CommandResult {
    let mut data_path = None;
    let mut json = false;
    let mut rest: Vec<String> = Vec::new();

    let mut tokens = args.iter();
    while let Some(token) = tokens.next() {
        match token.as_str() {
            "--data" => {
                let value = tokens.next().ok_or_else(|| {
                    CliError::InvalidArguments("--data requires a file path".into())
                })?;
                data_path = Some(PathBuf::from(value));
            }
            "--json" => json = true,
            _ => rest.push(token.clone()),
        }
    }

    let mut session = CliSession::new(data_path, json);
    let Some(command) = rest.first().cloned() else {
        return commands::help(&mut session, &[]);
    };

    match COMMANDS.iter().find(|entry| entry.name == command) {
        Some(entry) => (entry.handler)(&mut session, &rest[1..]),
        None => {
            if let Some(suggestion) = suggest(&command) {
                output::warning(format!(
                    "Unknown command `{command}`. Did you mean `{suggestion}`?"
                ));
            }
            Err(CliError::InvalidArguments(format!(
                "unknown command `{command}`; run `help` for the list"
            )))
        }
    }
}

fn suggest(input: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .map(|entry| (levenshtein(entry.name, input), entry.name))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= 3)
        .map(|(_, name)| name)
}

/// Value of `--name value` within a handler's argument slice.
pub(crate) fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == name)
        .and_then(|index| args.get(index + 1))
        .map(String::as_str)
}
