//! Big-Five personality scoring.
//!
//! [`QUESTIONS`] is the fixed onboarding quiz; [`calculate_personality_scores`]
//! turns an answer map into five normalized trait scores and a
//! [`PersuasionStyle`].

pub mod questions;
pub mod scoring;

pub use questions::{questions_for, Question, Trait, ANSWER_LABELS, QUESTIONS};
pub use scoring::{
    calculate_personality_scores, Answers, PersonalityProfile, PersonalityScores,
    PersuasionStyle,
};
