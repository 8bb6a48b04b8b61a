//! lineprompt CLI
//!
//! Main entry point for the lineprompt command-line tool.
//! Asks the operator a question and prints the answer, so shell scripts can
//! prompt with the same defaults, validation and formatting as the library.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AskCommand, ConfirmCommand, DemoCommand, RemoveDatabaseCommand, SelectCommand};
use lineprompt_core::{
    config::{AppConfig, FormattingOverrides},
    logging, AppResult,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// lineprompt - ask questions on the terminal and print the answers
#[derive(Parser, Debug)]
#[command(name = "lineprompt")]
#[command(about = "Ask questions on the terminal and print the answers", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, env = "LINEPROMPT_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Always append "?" to questions
    #[arg(long, global = true, conflicts_with = "no_question_mark")]
    question_mark: bool,

    /// Never append "?" to questions
    #[arg(long, global = true)]
    no_question_mark: bool,

    /// Do not append a space after prompts
    #[arg(long, global = true)]
    no_space: bool,

    /// Do not show defaults inside prompts
    #[arg(long, global = true)]
    no_show_default: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn formatting_overrides(&self) -> FormattingOverrides {
        let append_question_mark = if self.question_mark {
            Some(true)
        } else if self.no_question_mark {
            Some(false)
        } else {
            None
        };

        FormattingOverrides {
            append_question_mark,
            append_space: self.no_space.then_some(false),
            show_default_in_prompt: self.no_show_default.then_some(false),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a free-text question
    Ask(AskCommand),

    /// Ask a yes/no question
    Confirm(ConfirmCommand),

    /// Pick one entry from a list
    Select(SelectCommand),

    /// Walk through one question of each kind
    Demo(DemoCommand),

    /// Confirm before removing a database (dry run)
    RemoveDatabase(RemoveDatabaseCommand),
}

fn main() -> AppResult<ExitCode> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from the config file and environment
    let config = AppConfig::load_from(cli.config.as_deref())?;

    // Apply CLI overrides
    let overrides = cli.formatting_overrides();
    let config = config.with_overrides(cli.log_level, cli.verbose, cli.no_color, overrides);

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::debug!("Formatting: {:?}", config.formatting);
    tracing::debug!("Config file: {:?}", config.config_file);

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Confirm(_) => "confirm",
        Commands::Select(_) => "select",
        Commands::Demo(_) => "demo",
        Commands::RemoveDatabase(_) => "remove-database",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    // Only confirm can ask for a failure status
    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config).map(|_| ExitCode::SUCCESS),
        Commands::Confirm(cmd) => cmd.execute(&config),
        Commands::Select(cmd) => cmd.execute(&config).map(|_| ExitCode::SUCCESS),
        Commands::Demo(cmd) => cmd.execute(&config).map(|_| ExitCode::SUCCESS),
        Commands::RemoveDatabase(cmd) => cmd.execute(&config).map(|_| ExitCode::SUCCESS),
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
