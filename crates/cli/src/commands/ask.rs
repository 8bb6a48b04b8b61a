//! Ask command handler.
//!
//! Asks a free-text question and prints the answer.

use clap::Args;
use lineprompt_core::{config::AppConfig, AppResult};
use lineprompt_prompt::{validators, InputOptions, Validate};

/// Ask a free-text question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub question: String,

    /// Answer used when nothing is entered
    #[arg(short, long)]
    pub default: Option<String>,

    /// Only accept one of these answers (repeatable)
    #[arg(long = "one-of", value_name = "VALUE")]
    pub one_of: Vec<String>,

    /// Reject answers longer than this many characters
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Ask again after a rejected answer, up to this many times in total
    #[arg(long, default_value_t = 1)]
    pub attempts: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");
        tracing::debug!("Ask options: {:?}", self);

        let mut opts = InputOptions::new();
        if let Some(ref default) = self.default {
            opts = opts.with_default(default.clone());
        }
        if let Some(validator) = self.validator() {
            opts = opts.with_validator(validator);
        }

        let mut prompt = super::script_prompt(config);
        let answer = prompt.ask_until_valid(&self.question, Some(&opts), self.attempts)?;

        if self.json {
            println!("{}", serde_json::json!({ "answer": answer }));
        } else {
            println!("{}", answer);
        }

        Ok(())
    }

    /// Combine the requested checks into one validator.
    fn validator(&self) -> Option<impl Validate + 'static> {
        if self.one_of.is_empty() && self.max_length.is_none() {
            return None;
        }

        let one_of = (!self.one_of.is_empty()).then(|| validators::one_of(self.one_of.clone()));
        let max_length = self.max_length.map(validators::max_length);

        Some(move |value: &str| -> Result<(), String> {
            if let Some(ref v) = one_of {
                v.validate(value)?;
            }
            if let Some(ref v) = max_length {
                v.validate(value)?;
            }
            Ok(())
        })
    }
}
