//! CLI `questions`, `score` and `onboard` commands.

use anyhow::{Context, Result};
use std::path::Path;

use lumen::config::LumenConfig;
use lumen::personality::{calculate_personality_scores, Answers, ANSWER_LABELS, QUESTIONS};

use super::{open_store, print_json, read_input};

/// Print the questionnaire.
pub fn questions(json: bool) -> Result<()> {
    if json {
        return print_json(&QUESTIONS[..]);
    }

    println!("Personality Quiz");
    println!("{}", "=".repeat(40));
    for q in &QUESTIONS {
        let marker = if q.reverse { " (R)" } else { "" };
        println!("  {:<4} [{}]{} {}", q.id, q.r#trait, marker, q.text);
    }
    println!();
    println!("Answer scale:");
    for line in answer_scale() {
        println!("  {line}");
    }
    Ok(())
}

fn answer_scale() -> Vec<String> {
    ANSWER_LABELS
        .iter()
        .map(|(value, label)| format!("{value} = {label}"))
        .collect()
}

fn parse_answers(input: &str) -> Result<Answers> {
    serde_json::from_str(input).context("answers must be a JSON object of question id to number")
}

/// Score answers read from `input` (file or stdin) and print the result.
pub fn score(input: Option<&Path>) -> Result<()> {
    let answers = parse_answers(&read_input(input)?)?;
    print_json(&calculate_personality_scores(&answers))
}

/// Score answers and store the profile for `user_id`.
pub fn onboard(config: &LumenConfig, user_id: &str, input: Option<&Path>) -> Result<()> {
    let answers = parse_answers(&read_input(input)?)?;
    let mut store = open_store(config)?;
    let profile =
        lumen::profile::complete_onboarding(&mut store, user_id, &answers, chrono::Utc::now())?;
    print_json(&profile)
}
