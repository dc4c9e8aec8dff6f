//! The fixed Big-Five questionnaire.
//!
//! Defines [`Trait`] (the five personality dimensions), [`Question`] (a single
//! Likert item), and the read-only [`QUESTIONS`] table. The table's shape is
//! checked at compile time: three questions per trait, at least one reverse-scored
//! item per trait, and unique ids.

use serde::{Deserialize, Serialize};

/// Number of questions asked for every trait.
pub const QUESTIONS_PER_TRAIT: usize = 3;

/// The five Big-Five personality dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl Trait {
    /// All traits, in questionnaire order.
    pub const ALL: [Trait; 5] = [
        Self::Openness,
        Self::Conscientiousness,
        Self::Extraversion,
        Self::Agreeableness,
        Self::Neuroticism,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Openness => "openness",
            Self::Conscientiousness => "conscientiousness",
            Self::Extraversion => "extraversion",
            Self::Agreeableness => "agreeableness",
            Self::Neuroticism => "neuroticism",
        }
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Trait {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openness" => Ok(Self::Openness),
            "conscientiousness" => Ok(Self::Conscientiousness),
            "extraversion" => Ok(Self::Extraversion),
            "agreeableness" => Ok(Self::Agreeableness),
            "neuroticism" => Ok(Self::Neuroticism),
            _ => Err(format!("unknown trait: {s}")),
        }
    }
}

/// A single questionnaire item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Short unique code, e.g. `"o1"`.
    pub id: &'static str,
    /// Trait this item measures.
    pub r#trait: Trait,
    /// Prompt shown to the user. Not used for scoring.
    pub text: &'static str,
    /// Agreement indicates the opposite of the trait; the answer is mirrored.
    pub reverse: bool,
}

const fn q(id: &'static str, r#trait: Trait, text: &'static str, reverse: bool) -> Question {
    Question {
        id,
        r#trait,
        text,
        reverse,
    }
}

/// The onboarding questionnaire.
pub const QUESTIONS: [Question; 15] = [
    q("o1", Trait::Openness, "I enjoy exploring new ideas and concepts", false),
    q("o2", Trait::Openness, "I prefer routine over variety", true),
    q("o3", Trait::Openness, "I have a vivid imagination", false),
    q("c1", Trait::Conscientiousness, "I like to plan things in advance", false),
    q("c2", Trait::Conscientiousness, "I often leave tasks unfinished", true),
    q("c3", Trait::Conscientiousness, "I pay attention to details", false),
    q("e1", Trait::Extraversion, "I feel energized around other people", false),
    q("e2", Trait::Extraversion, "I prefer spending time alone", true),
    q("e3", Trait::Extraversion, "I am talkative in social situations", false),
    q("a1", Trait::Agreeableness, "I try to help others when I can", false),
    q("a2", Trait::Agreeableness, "I sometimes find it hard to trust people", true),
    q("a3", Trait::Agreeableness, "I care about how others feel", false),
    q("n1", Trait::Neuroticism, "I often feel anxious or worried", false),
    q("n2", Trait::Neuroticism, "I stay calm under pressure", true),
    q("n3", Trait::Neuroticism, "My mood changes frequently", false),
];

const _: () = assert!(
    is_valid_question_table(&QUESTIONS),
    "questionnaire must have 3 questions and a reversed item per trait, with unique ids"
);

/// Likert labels for answers 1 through 5.
pub const ANSWER_LABELS: [(u8, &str); 5] = [
    (1, "Strongly Disagree"),
    (2, "Disagree"),
    (3, "Neutral"),
    (4, "Agree"),
    (5, "Strongly Agree"),
];

/// Questions that measure `t`, in table order.
pub fn questions_for(t: Trait) -> impl Iterator<Item = &'static Question> {
    QUESTIONS.iter().filter(move |q| q.r#trait == t)
}

/// Check the table invariants. Usable in const context.
pub const fn is_valid_question_table(questions: &[Question]) -> bool {
    let mut t = 0;
    while t < Trait::ALL.len() {
        let target = Trait::ALL[t] as u8;
        let mut count = 0;
        let mut reversed = 0;
        let mut i = 0;
        while i < questions.len() {
            if questions[i].r#trait as u8 == target {
                count += 1;
                if questions[i].reverse {
                    reversed += 1;
                }
            }
            i += 1;
        }
        if count != QUESTIONS_PER_TRAIT || reversed == 0 {
            return false;
        }
        t += 1;
    }

    let mut i = 0;
    while i < questions.len() {
        let mut j = i + 1;
        while j < questions.len() {
            if str_eq(questions[i].id, questions[j].id) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
