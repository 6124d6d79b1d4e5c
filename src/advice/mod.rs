//! Rule-based advice for journal entries.
//!
//! Advice is a pure function of the entry's mood label and the text of its
//! answers: a base message looked up by mood, followed by one paragraph for
//! each keyword rule that matches. There is no hidden state, so identical
//! inputs always produce byte-identical output.
//!
//! # Example
//!
//! ```
//! use daybook::advice::compute_advice;
//!
//! let advice = compute_advice("Sad", "I felt tired and alone today");
//! let paragraphs: Vec<&str> = advice.split("\n\n").collect();
//! assert_eq!(paragraphs.len(), 3);
//! assert!(paragraphs[1].contains("feeling tired"));
//! assert!(paragraphs[2].contains("feeling alone"));
//! ```

mod mood;

pub use mood::{mood_label, Mood};

use tracing::debug;

/// Separator placed between the base message and each extra paragraph.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Message used when no mood (or an unrecognised one) was given.
pub const FALLBACK_MESSAGE: &str = "You didn’t choose a mood, but your writing still matters. You’re taking time to understand yourself—that’s already a big step.";

/// A keyword group and the paragraph it contributes.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    /// Short name of the theme, used in logs.
    pub theme: &'static str,
    /// Lowercase substrings; any one of them triggers the rule.
    pub keywords: &'static [&'static str],
    /// Paragraph appended when the rule matches.
    pub message: &'static str,
}

impl KeywordRule {
    /// True when any keyword occurs in `lowered_text`.
    pub fn matches(&self, lowered_text: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered_text.contains(keyword))
    }
}

/// Keyword rules in the order their paragraphs are appended.
pub const ADVICE_RULES: &[KeywordRule] = &[
    KeywordRule {
        theme: "tiredness",
        keywords: &["tired", "exhausted"],
        message: "You mentioned feeling tired. Try to prioritize rest tonight, even if it’s just going to bed a bit earlier or taking a short break.",
    },
    KeywordRule {
        theme: "overwhelm",
        keywords: &["overwhelmed", "too much"],
        message: "Feeling overwhelmed is a signal to slow down. Break things into tiny steps and tackle them one at a time.",
    },
    KeywordRule {
        theme: "loneliness",
        keywords: &["lonely", "alone"],
        message: "You also mentioned feeling alone. Consider reaching out to someone you trust or doing something comforting that makes you feel connected.",
    },
    KeywordRule {
        theme: "pride",
        keywords: &["proud", "accomplished"],
        message: "You noticed something you’re proud of—celebrate that! Acknowledge your progress instead of skipping past it.",
    },
];

/// The base message for a mood, or the fallback when there is none.
pub fn base_message(mood: Option<Mood>) -> &'static str {
    match mood {
        Some(Mood::VeryHappy) => "You seem to be in a really good place today. Take a moment to appreciate what’s going well and think about how you can keep that going.",
        Some(Mood::Happy) => "You’re feeling pretty good today. Try to note the small things that made you feel this way so you can revisit them on tougher days.",
        Some(Mood::Neutral) => "You’re feeling neutral. That’s okay. Maybe pick one small thing you’re grateful for or something you’re looking forward to.",
        Some(Mood::Sad) => "You’re feeling sad today. Be gentle with yourself—try to do one kind thing for yourself and maybe reach out to someone you trust.",
        Some(Mood::VerySad) => "You’re really down right now. It might help to talk to a close friend, family member, or a professional. You don’t have to carry everything alone.",
        Some(Mood::Stressed) => "You’re feeling stressed. Try to break your tasks into smaller steps, and give yourself permission to rest between them.",
        Some(Mood::Anxious) => "You’re feeling anxious. Slow, deep breaths and grounding yourself in the present moment can help. Focus on what you can control right now.",
        None => FALLBACK_MESSAGE,
    }
}

/// Composes advice for a mood label and the combined answer text.
///
/// The label is matched case-sensitively against [`Mood`] labels; anything
/// else, including `"Not specified"`, gets the fallback message. Keyword
/// matching is case-insensitive and paragraphs always follow
/// [`ADVICE_RULES`] order, whatever order the keywords appear in the text.
pub fn compute_advice(mood: &str, text: &str) -> String {
    advice_for(Mood::from_label(mood), text)
}

/// Same as [`compute_advice`] for an already-parsed mood.
pub fn advice_for(mood: Option<Mood>, text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut advice = base_message(mood).to_string();

    for rule in ADVICE_RULES.iter().filter(|rule| rule.matches(&lowered)) {
        debug!("Advice rule matched: {}", rule.theme);
        advice.push_str(PARAGRAPH_SEPARATOR);
        advice.push_str(rule.message);
    }

    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(theme: &str) -> &'static KeywordRule {
        ADVICE_RULES
            .iter()
            .find(|rule| rule.theme == theme)
            .expect("known theme")
    }

    #[test]
    fn test_every_mood_starts_with_its_base_message() {
        for mood in Mood::ALL {
            let advice = compute_advice(mood.label(), "I am proud of myself");
            assert!(advice.starts_with(base_message(Some(mood))));
        }
        let advice = compute_advice("Not specified", "");
        assert_eq!(advice, FALLBACK_MESSAGE);
    }

    #[test]
    fn test_base_messages_are_distinct() {
        let mut seen: Vec<&str> = Mood::ALL.iter().map(|m| base_message(Some(*m))).collect();
        seen.push(base_message(None));
        let total = seen.len();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), total);
    }

    #[test]
    fn test_no_keywords_returns_base_only() {
        let advice = compute_advice("Happy", "Went for a walk and cooked dinner.");
        assert_eq!(advice, base_message(Some(Mood::Happy)));
        assert!(!advice.contains(PARAGRAPH_SEPARATOR));
    }

    #[test]
    fn test_empty_text_returns_base_only() {
        assert_eq!(compute_advice("Anxious", ""), base_message(Some(Mood::Anxious)));
    }

    #[test]
    fn test_unrecognised_mood_uses_fallback_then_keywords() {
        let advice = compute_advice("sad", "so exhausted");
        assert_eq!(
            advice,
            format!("{}\n\n{}", FALLBACK_MESSAGE, rule("tiredness").message)
        );
    }

    #[test]
    fn test_sad_tired_alone_example() {
        let advice = compute_advice("Sad", "I felt tired and alone today");
        let expected = format!(
            "{}\n\n{}\n\n{}",
            base_message(Some(Mood::Sad)),
            rule("tiredness").message,
            rule("loneliness").message
        );
        assert_eq!(advice, expected);
        assert!(!advice.contains(rule("overwhelm").message));
        assert!(!advice.contains(rule("pride").message));
    }

    #[test]
    fn test_paragraph_order_ignores_text_order() {
        let text = "Accomplished a lot, felt lonely, it was too much and I'm TIRED";
        let advice = compute_advice("Neutral", text);
        let expected: Vec<&str> = std::iter::once(base_message(Some(Mood::Neutral)))
            .chain(ADVICE_RULES.iter().map(|rule| rule.message))
            .collect();
        assert_eq!(advice, expected.join(PARAGRAPH_SEPARATOR));
    }

    #[test]
    fn test_each_rule_fires_once_for_repeated_keywords() {
        let advice = compute_advice("Stressed", "tired tired exhausted tired");
        assert_eq!(advice.matches(rule("tiredness").message).count(), 1);
    }

    #[test]
    fn test_keyword_matching_is_substring_based() {
        // "alone" also matches inside "aloneness"
        let advice = compute_advice("Happy", "Enjoying some aloneness");
        assert!(advice.ends_with(rule("loneliness").message));
    }

    #[test]
    fn test_deterministic() {
        let first = compute_advice("Very Sad", "overwhelmed and lonely");
        let second = compute_advice("Very Sad", "overwhelmed and lonely");
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_advice_for_matches_compute_advice() {
        assert_eq!(
            advice_for(Some(Mood::VeryHappy), "proud"),
            compute_advice("Very Happy", "proud")
        );
        assert_eq!(advice_for(None, "proud"), compute_advice("", "proud"));
    }
}
