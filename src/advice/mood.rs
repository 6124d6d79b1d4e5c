//! The closed set of mood labels a journal entry can carry.

use crate::constants::MOOD_UNSPECIFIED_LABEL;
use std::fmt;
use std::str::FromStr;

/// A mood chosen for a journal entry.
///
/// Labels are matched case-sensitively. The "unspecified" sentinel is not a
/// variant: it is modelled as `None` wherever a mood is optional.
///
/// # Examples
///
/// ```
/// use daybook::advice::Mood;
///
/// assert_eq!(Mood::from_label("Very Sad"), Some(Mood::VerySad));
/// assert_eq!(Mood::from_label("very sad"), None);
/// assert_eq!(Mood::Anxious.label(), "Anxious");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    /// "Very Happy"
    VeryHappy,
    /// "Happy"
    Happy,
    /// "Neutral"
    Neutral,
    /// "Sad"
    Sad,
    /// "Very Sad"
    VerySad,
    /// "Stressed"
    Stressed,
    /// "Anxious"
    Anxious,
}

impl Mood {
    /// Every mood, in the order they are offered to the user.
    pub const ALL: [Mood; 7] = [
        Mood::VeryHappy,
        Mood::Happy,
        Mood::Neutral,
        Mood::Sad,
        Mood::VerySad,
        Mood::Stressed,
        Mood::Anxious,
    ];

    /// The display label, which is also the value persisted in the store.
    pub fn label(self) -> &'static str {
        match self {
            Mood::VeryHappy => "Very Happy",
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
            Mood::VerySad => "Very Sad",
            Mood::Stressed => "Stressed",
            Mood::Anxious => "Anxious",
        }
    }

    /// Exact, case-sensitive lookup by label.
    pub fn from_label(label: &str) -> Option<Mood> {
        Mood::ALL.into_iter().find(|mood| mood.label() == label)
    }

    fn slug(self) -> &'static str {
        match self {
            Mood::VeryHappy => "very-happy",
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
            Mood::VerySad => "very-sad",
            Mood::Stressed => "stressed",
            Mood::Anxious => "anxious",
        }
    }
}

/// Label to store for an optional mood.
pub fn mood_label(mood: Option<Mood>) -> &'static str {
    mood.map_or(MOOD_UNSPECIFIED_LABEL, Mood::label)
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses user input from the command line.
///
/// Accepts the exact label (`"Very Happy"`) or its kebab-case form
/// (`"very-happy"`). This is more lenient than [`Mood::from_label`], which is
/// what the advice table uses.
impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Mood::from_label(trimmed)
            .or_else(|| {
                let lowered = trimmed.to_lowercase();
                Mood::ALL.into_iter().find(|mood| mood.slug() == lowered)
            })
            .ok_or_else(|| {
                let options: Vec<&str> = Mood::ALL.iter().map(|mood| mood.slug()).collect();
                format!(
                    "unknown mood '{}'; expected one of: {}",
                    trimmed,
                    options.join(", ")
                )
            })
    }
}
