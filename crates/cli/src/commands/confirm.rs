//! Confirm command handlers.
//!
//! Handles yes/no questions, including the database removal confirmation.

use clap::Args;
use lineprompt_core::{config::AppConfig, AppResult};
use lineprompt_prompt::{stdio, InputOptions};
use std::process::ExitCode;

/// Ask a yes/no question
#[derive(Args, Debug)]
pub struct ConfirmCommand {
    /// The question to ask
    pub question: String,

    /// Answer used when nothing is entered (e.g. "no")
    #[arg(short, long)]
    pub default: Option<String>,

    /// Exit with status 1 when the answer is not yes
    #[arg(long)]
    pub exit_code: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ConfirmCommand {
    /// Returns the process exit status for the answer; see [`Self::fails_on`].
    pub fn execute(&self, config: &AppConfig) -> AppResult<ExitCode> {
        tracing::info!("Executing confirm command");
        tracing::debug!("Confirm options: {:?}", self);

        let mut opts = InputOptions::new();
        if let Some(ref default) = self.default {
            opts = opts.with_default(default.clone());
        }

        let mut prompt = super::script_prompt(config);
        let confirmed = prompt.confirm(&self.question, Some(&opts))?;

        if self.json {
            println!("{}", serde_json::json!({ "confirmed": confirmed }));
        } else {
            println!("{}", confirmed);
        }

        if self.fails_on(confirmed) {
            tracing::debug!("Answer was not yes, exiting with status 1");
            return Ok(ExitCode::FAILURE);
        }

        Ok(ExitCode::SUCCESS)
    }

    /// Whether `confirmed` should end the process with a failure status.
    fn fails_on(&self, confirmed: bool) -> bool {
        self.exit_code && !confirmed
    }
}

/// Confirm before removing a database (dry run)
#[derive(Args, Debug)]
pub struct RemoveDatabaseCommand {
    /// Name of the database
    #[arg(default_value = "somedatabase")]
    pub name: String,
}

impl RemoveDatabaseCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing remove-database command");

        let mut prompt = stdio(config.formatting);
        let opts = InputOptions::new().with_default("no").with_question_mark();

        let remove = prompt.confirm(
            &format!(
                "Are you sure you want to permanently remove the database {:?}",
                self.name
            ),
            Some(&opts),
        )?;

        println!("{}", remove);
        Ok(())
    }
}
