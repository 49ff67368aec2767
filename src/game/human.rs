use super::Outcome;
use super::Respondent;
use colored::Colorize;
use dialoguer::Input;

/// Terminal player. Replies are passed through untouched; the session
/// decides whether they count as yes or no.
#[derive(Debug, Default)]
pub struct Human;

impl Respondent for Human {
    fn ask(&mut self, question: &str) -> anyhow::Result<String> {
        Ok(Input::<String>::new()
            .with_prompt(format!("{} {}", question, "(yes/no)".dimmed()))
            .allow_empty(true)
            .report(false)
            .interact_text()?)
    }
    fn reveal(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Found { .. } => println!("{}", outcome.to_string().green()),
            Outcome::Stumped { .. } => println!("{}", outcome.to_string().yellow()),
        }
    }
}
