// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use decemvirate::app_config::{self, Config, OutputFormat, DEFAULT_CONFIG_FILENAME};
use decemvirate::app_controller::{Controller, LookupStatus};
use decemvirate::Operation;

/// Process exit status
#[derive(Debug, Clone, Copy)]
enum Status {
    Success = 0,
    NotFound = 1,
    Error = 2,
    MissingParameter = 3,
    InvalidCommand = 4,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status as u8)
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search German feats by name
    #[command(name = "finddefeat")]
    FindGermanFeat {
        /// Part of the German name
        name: String,
    },

    /// Search English feats by name
    #[command(name = "findenfeat")]
    FindEnglishFeat {
        /// Part of the English name
        name: String,
    },

    /// Search German spells by name
    #[command(name = "finddespell")]
    FindGermanSpell {
        /// Part of the German name
        name: String,
    },

    /// Search English spells by name
    #[command(name = "findenspell")]
    FindEnglishSpell {
        /// Part of the English name
        name: String,
    },

    /// Search spells by class (and level)
    #[command(name = "findspellbyclass")]
    FindSpellByClass {
        /// Class name, matched as a whole word
        class: String,
        /// Only spells of exactly this level
        level: Option<u32>,
    },

    /// Search German publication by abbreviation or title
    #[command(name = "finddepub")]
    FindGermanPublication {
        /// Abbreviation or part of the title
        name: String,
    },

    /// Search English publication by product code, abbreviation or title
    #[command(name = "findenpub")]
    FindEnglishPublication {
        /// Product code, abbreviation or part of the title
        name: String,
    },

    /// Display version information, including the database's
    Version,

    /// Generate shell completions for decemvirate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// The lookup this command runs, if any
    fn lookup(&self) -> Option<(Operation, &str, Option<String>)> {
        match self {
            Self::FindGermanFeat { name } => Some((Operation::FindGermanFeat, name.as_str(), None)),
            Self::FindEnglishFeat { name } => Some((Operation::FindEnglishFeat, name.as_str(), None)),
            Self::FindGermanSpell { name } => Some((Operation::FindGermanSpell, name.as_str(), None)),
            Self::FindEnglishSpell { name } => Some((Operation::FindEnglishSpell, name.as_str(), None)),
            Self::FindSpellByClass { class, level } => Some((
                Operation::FindSpellByClass,
                class.as_str(),
                level.map(|l| l.to_string()),
            )),
            Self::FindGermanPublication { name } => {
                Some((Operation::FindGermanPublication, name.as_str(), None))
            }
            Self::FindEnglishPublication { name } => {
                Some((Operation::FindEnglishPublication, name.as_str(), None))
            }
            Self::Version | Self::Completions { .. } => None,
        }
    }
}

/// Decemvirate - A Pathfinder TTRPG helper
///
/// Looks up feats, spells and publications in a Pathfinder rules database,
/// in German and English.
#[derive(Parser, Debug)]
#[command(name = "decemvirate")]
#[command(version)]
#[command(about = "Pathfinder TTRPG helper: feat, spell and publication lookups")]
#[command(long_about = "Decemvirate looks up feats, spells and publications in a Pathfinder rules database.

EXAMPLES:
    decemvirate finddefeat Angriff              # German feats containing 'Angriff'
    decemvirate findenspell fire                # English spell names containing 'fire'
    decemvirate findspellbyclass wizard 3       # Level 3 wizard spells
    decemvirate finddepub GRW                   # German publication and its originals
    decemvirate -j findenpub PZO1110            # English publication as JSON
    decemvirate -d other.sqlite version         # Version of a specific database

CONFIGURATION:
    Configuration is read from decemvirate.json by default. You can specify a
    different config file with --config. Without a config file the defaults are
    used: the database at data/pathfinder.sqlite, requiring version 0.8 or newer.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// SQLite database to use
    #[arg(short, long, global = true, value_name = "PATH")]
    database: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long = "config", global = true, default_value = DEFAULT_CONFIG_FILENAME)]
    config_path: PathBuf,

    /// Output information in JSON format instead of plain text
    #[arg(short, long, global = true)]
    json: bool,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and label for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (colour, label) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                colour,
                now,
                label,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // The logger accepts everything; the effective level is set via max_level
    if CustomLogger::init(LevelFilter::Trace).is_err() {
        return Status::Error.into();
    }
    log::set_max_level(LevelFilter::Warn);

    let cli = match CommandLineOptions::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let status = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Status::Success,
                ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                | ErrorKind::MissingRequiredArgument
                | ErrorKind::MissingSubcommand => Status::MissingParameter,
                _ => Status::InvalidCommand,
            };
            let _ = e.print();
            return status.into();
        }
    };

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "decemvirate", &mut std::io::stdout());
        return Status::Success.into();
    }

    match run(cli).await {
        Ok(status) => status.into(),
        Err(e) => {
            error!("{:#}", e);
            Status::Error.into()
        }
    }
}

async fn run(cli: CommandLineOptions) -> Result<Status> {
    let mut config = Config::load(&cli.config_path)?;

    // Override config with CLI options if provided
    if let Some(database) = cli.database {
        config.database_path = database;
    }
    if cli.json {
        config.output = OutputFormat::Json;
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.into();
    }

    log::set_max_level((&config.log_level).into());

    let controller = Controller::with_config(config)?;
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();

    let Some((operation, query, param)) = cli.command.lookup() else {
        controller.print_version(&mut stdout)?;
        return Ok(Status::Success);
    };

    let status = controller
        .run(&mut stdout, &mut stderr, operation, query, param.as_deref())
        .await?;

    Ok(match status {
        LookupStatus::Found => Status::Success,
        LookupStatus::NotFound => Status::NotFound,
    })
}
