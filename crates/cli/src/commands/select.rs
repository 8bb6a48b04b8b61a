//! Select command handler.

use clap::Args;
use lineprompt_core::{config::AppConfig, AppResult};
use lineprompt_prompt::SelectOptions;

/// Pick one entry from a list
#[derive(Args, Debug)]
pub struct SelectCommand {
    /// The question to ask
    pub question: String,

    /// Entries to choose from, listed in order
    #[arg(required = true, num_args = 1..)]
    pub choices: Vec<String>,

    /// 1-based entry chosen when nothing is entered
    #[arg(short, long, default_value_t = 0, hide_default_value = true)]
    pub default: usize,

    /// Print the 0-based index instead of the entry
    #[arg(long, conflicts_with = "json")]
    pub index: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SelectCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing select command");
        tracing::debug!("Select options: {:?}", self);

        let opts = SelectOptions::new().with_default(self.default);

        let mut prompt = super::script_prompt(config);
        let selection = prompt.select(&self.question, &self.choices, Some(&opts))?;

        if self.json {
            println!("{}", serde_json::to_string(&selection)?);
        } else if self.index {
            println!("{}", selection.index);
        } else {
            println!("{}", selection.text);
        }

        Ok(())
    }
}
