//! Demo command handler.
//!
//! Asks one question of each kind on the terminal, printing errors instead
//! of stopping so every prompt can be tried.

use clap::Args;
use lineprompt_core::{config::AppConfig, AppResult};
use lineprompt_prompt::{stdio, validators, InputOptions, SelectOptions};

/// Walk through one question of each kind
#[derive(Args, Debug)]
pub struct DemoCommand {}

impl DemoCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing demo command");

        let mut prompt = stdio(config.formatting);

        let opts = InputOptions::new()
            .with_default("42")
            .with_validator(validators::exact("42", "the answer must be 42"));
        match prompt.ask("what is the meaning of life", Some(&opts)) {
            Ok(answer) => println!("answered: {}", answer),
            Err(e) => eprintln!("{}", e),
        }

        // Confirm always answers with a boolean; anything but y/yes is false
        let opts = InputOptions::new().with_default("yes");
        match prompt.confirm("Do you confirm these changes", Some(&opts)) {
            Ok(confirmed) => println!("confirmed: {}", confirmed),
            Err(e) => eprintln!("{}", e),
        }

        let opts = SelectOptions::new().with_default(1);
        match prompt.select(
            "Select an option",
            &["Ludicrous mode", "Normal mode"],
            Some(&opts),
        ) {
            Ok(selection) => {
                println!("selected option: {}", selection.text);
                println!("selected index: {}", selection.index);
            }
            Err(e) => eprintln!("{}", e),
        }

        Ok(())
    }
}
