//! Trait aggregation and persuasion-style classification.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::questions::{questions_for, Question, Trait};

/// Answers keyed by question id. Values are intended to be 1..=5 but are not checked.
pub type Answers = HashMap<String, f64>;

/// Lowest point of the Likert scale.
pub const SCALE_MIN: f64 = 1.0;
/// Highest point of the Likert scale. Reverse scoring and normalization both depend on it.
pub const SCALE_MAX: f64 = 5.0;
/// Contribution used for a question with no answer.
pub const NEUTRAL_ANSWER: f64 = 3.0;
/// A trait must score strictly above this to drive the persuasion style.
pub const STYLE_THRESHOLD: f64 = 0.6;

/// How the user is most receptive to being persuaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersuasionStyle {
    /// Logic and evidence.
    Logos,
    /// Emotion and empathy.
    Pathos,
    /// Credibility and authority.
    Ethos,
}

impl PersuasionStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Logos => "logos",
            Self::Pathos => "pathos",
            Self::Ethos => "ethos",
        }
    }

    /// First match wins: logos, then pathos, then ethos.
    pub fn classify(openness: f64, conscientiousness: f64, agreeableness: f64) -> Self {
        if openness > STYLE_THRESHOLD && conscientiousness > STYLE_THRESHOLD {
            Self::Logos
        } else if agreeableness > STYLE_THRESHOLD {
            Self::Pathos
        } else {
            Self::Ethos
        }
    }
}

impl std::fmt::Display for PersuasionStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized trait scores. `[0.2, 1.0]` when every answer is within the scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalityScores {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
    pub persuasion_style: PersuasionStyle,
}

impl PersonalityScores {
    pub fn trait_score(&self, t: Trait) -> f64 {
        match t {
            Trait::Openness => self.openness,
            Trait::Conscientiousness => self.conscientiousness,
            Trait::Extraversion => self.extraversion,
            Trait::Agreeableness => self.agreeableness,
            Trait::Neuroticism => self.neuroticism,
        }
    }

    /// Stamp the scores with a completion time, producing the stored profile.
    pub fn into_profile(self, completed_at: chrono::DateTime<chrono::Utc>) -> PersonalityProfile {
        PersonalityProfile {
            scores: self,
            completed_at: completed_at.to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
        }
    }
}

/// The value written to a user's `personality_profile` on onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    #[serde(flatten)]
    pub scores: PersonalityScores,
    /// RFC 3339 timestamp of quiz completion.
    pub completed_at: String,
}

/// Score a (possibly partial) answer map against [`QUESTIONS`](super::QUESTIONS).
///
/// Missing answers count as [`NEUTRAL_ANSWER`]; out-of-range values flow
/// through the arithmetic unchanged.
pub fn calculate_personality_scores(answers: &Answers) -> PersonalityScores {
    let openness = trait_score(Trait::Openness, answers);
    let conscientiousness = trait_score(Trait::Conscientiousness, answers);
    let agreeableness = trait_score(Trait::Agreeableness, answers);

    let scores = PersonalityScores {
        openness,
        conscientiousness,
        extraversion: trait_score(Trait::Extraversion, answers),
        agreeableness,
        neuroticism: trait_score(Trait::Neuroticism, answers),
        persuasion_style: PersuasionStyle::classify(openness, conscientiousness, agreeableness),
    };

    tracing::debug!(
        answered = answers.len(),
        style = %scores.persuasion_style,
        "personality scored"
    );
    scores
}

/// Sum of contributions for `t`, divided by the trait's maximum possible total.
pub fn trait_score(t: Trait, answers: &Answers) -> f64 {
    let (total, count) = questions_for(t).fold((0.0, 0usize), |(sum, n), q| {
        (sum + contribution(q, answers), n + 1)
    });
    total / (count as f64 * SCALE_MAX)
}

fn contribution(question: &Question, answers: &Answers) -> f64 {
    let answer = answers
        .get(question.id)
        .copied()
        .unwrap_or(NEUTRAL_ANSWER);
    if question.reverse {
        SCALE_MAX + SCALE_MIN - answer
    } else {
        answer
    }
}
