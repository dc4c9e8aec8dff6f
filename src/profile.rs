//! Onboarding completion: score the quiz and store the profile.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::personality::{calculate_personality_scores, Answers, PersonalityProfile};
use crate::store::JournalStore;

/// Score `answers`, then write the profile and mark the user onboarded.
///
/// Storage failures are returned to the caller.
pub fn complete_onboarding<S: JournalStore + ?Sized>(
    store: &mut S,
    user_id: &str,
    answers: &Answers,
    completed_at: DateTime<Utc>,
) -> Result<PersonalityProfile> {
    let profile = calculate_personality_scores(answers).into_profile(completed_at);

    store
        .update_user_profile(user_id, &profile, true)
        .with_context(|| format!("failed to save personality profile for user {user_id}"))?;

    tracing::info!(
        user_id,
        persuasion_style = %profile.scores.persuasion_style,
        "onboarding completed"
    );
    Ok(profile)
}
