//! Keyword lexicons and the context sentiment heuristic.

use super::types::Sentiment;

const POSITIVE_WORDS: [&str; 9] = [
    "good", "great", "happy", "love", "enjoy", "excited", "wonderful", "amazing", "thankful",
];

const NEGATIVE_WORDS: [&str; 9] = [
    "bad", "sad", "angry", "hate", "worried", "stressed", "frustrated", "terrible", "awful",
];

/// Emotion keywords grouped by the sentiment they carry, scanned in this order.
pub const EMOTION_KEYWORDS: [(Sentiment, &[&str]); 3] = [
    (
        Sentiment::Positive,
        &[
            "happy", "excited", "grateful", "proud", "hopeful", "peaceful", "content", "joyful",
            "relieved",
        ],
    ),
    (
        Sentiment::Negative,
        &[
            "sad", "angry", "frustrated", "anxious", "worried", "stressed", "overwhelmed",
            "disappointed", "hurt",
        ],
    ),
    (
        Sentiment::Neutral,
        &["confused", "uncertain", "curious", "thoughtful", "reflective"],
    ),
];

/// Compare how many positive and negative lexicon words appear in `context`.
///
/// Each word counts once no matter how often it repeats. Ties are neutral.
pub fn analyze_sentiment(context: &str) -> Sentiment {
    let lower = context.to_lowercase();
    let positive = POSITIVE_WORDS.iter().filter(|w| lower.contains(**w)).count();
    let negative = NEGATIVE_WORDS.iter().filter(|w| lower.contains(**w)).count();

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn more_positive_words_is_positive() {
        assert_eq!(analyze_sentiment("It was wonderful and amazing"), Sentiment::Positive);
    }

    #[test]
    fn more_negative_words_is_negative() {
        assert_eq!(analyze_sentiment("a TERRIBLE day"), Sentiment::Negative);
    }

    #[test]
    fn tie_is_neutral() {
        assert_eq!(analyze_sentiment("good and bad"), Sentiment::Neutral);
        assert_eq!(analyze_sentiment("nothing here"), Sentiment::Neutral);
        assert_eq!(analyze_sentiment(""), Sentiment::Neutral);
    }

    #[test]
    fn repeats_count_once() {
        assert_eq!(
            analyze_sentiment("great great great but sad and angry"),
            Sentiment::Negative
        );
    }

    #[test]
    fn matches_inside_longer_words() {
        // "badge" contains "bad"
        assert_eq!(analyze_sentiment("my new badge"), Sentiment::Negative);
    }
}
