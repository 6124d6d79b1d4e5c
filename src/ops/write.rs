//! Capture and save a new journal entry.

use crate::advice::{advice_for, mood_label, Mood};
use crate::constants::{EMPTY_ENTRY_MESSAGE, JOURNAL_QUESTIONS};
use crate::db::{Database, NewEntry};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// An entry that has been filled in but not saved yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub mood: Option<Mood>,
    pub answers: [String; 3],
}

impl EntryDraft {
    /// True when every answer is empty after trimming.
    ///
    /// A draft with at least one non-blank answer is accepted as-is, even if
    /// the other answers are empty.
    pub fn is_blank(&self) -> bool {
        self.answers.iter().all(|answer| answer.trim().is_empty())
    }

    /// The three answers joined with single spaces, as fed to the advice rules.
    pub fn combined_text(&self) -> String {
        self.answers.join(" ")
    }
}

/// The outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedEntry {
    pub id: i64,
    pub advice: String,
}

/// Saves a draft dated `date`.
///
/// # Flow
///
/// 1. Trim the answers
/// 2. Reject the draft if every answer is blank
/// 3. Compute advice from the mood and the combined answers
/// 4. Append the entry to the store
///
/// # Errors
///
/// Returns `AppError::Journal` for a blank draft, in which case nothing is
/// written. Storage failures propagate unchanged.
pub fn save_entry(db: &Database, draft: &EntryDraft, date: NaiveDate) -> AppResult<SavedEntry> {
    let draft = EntryDraft {
        mood: draft.mood,
        answers: draft.answers.clone().map(|answer| answer.trim().to_string()),
    };

    if draft.is_blank() {
        debug!("Refusing to save blank entry");
        return Err(AppError::Journal(EMPTY_ENTRY_MESSAGE.to_string()));
    }

    let advice = advice_for(draft.mood, &draft.combined_text());
    let [answer_1, answer_2, answer_3] = draft.answers;

    let id = db.append(&NewEntry {
        date,
        mood: Some(mood_label(draft.mood).to_string()),
        answer_1,
        answer_2,
        answer_3,
        advice: advice.clone(),
    })?;

    info!("Saved journal entry {} for {}", id, date);
    Ok(SavedEntry { id, advice })
}

/// Prompts for the mood (unless already known) and the three answers.
///
/// Each answer is a single line. An empty mood answer means "Not specified";
/// an unrecognised one is asked again.
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `output` fails,
/// or if `input` ends before the mood has been answered.
pub fn collect_draft<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    mood: Option<Mood>,
) -> AppResult<EntryDraft> {
    let mood = match mood {
        Some(mood) => Some(mood),
        None => prompt_mood(input, output)?,
    };

    let mut answers: [String; 3] = Default::default();
    for (question, answer) in JOURNAL_QUESTIONS.iter().zip(answers.iter_mut()) {
        writeln!(output, "{}", question)?;
        write!(output, "> ")?;
        output.flush()?;
        *answer = read_line(input)?.unwrap_or_default();
    }

    Ok(EntryDraft { mood, answers })
}

fn prompt_mood<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> AppResult<Option<Mood>> {
    writeln!(output, "How are you feeling today?")?;
    for (idx, mood) in Mood::ALL.iter().enumerate() {
        writeln!(output, "  {}. {}", idx + 1, mood)?;
    }

    loop {
        write!(output, "Mood (number or name, blank to skip): ")?;
        output.flush()?;

        let line = read_line(input)?.ok_or_else(|| {
            AppError::Journal("Input ended before a mood was chosen".to_string())
        })?;
        let choice = line.trim();

        if choice.is_empty() {
            return Ok(None);
        }
        if let Ok(number) = choice.parse::<usize>() {
            if let Some(mood) = number.checked_sub(1).and_then(|i| Mood::ALL.get(i)) {
                return Ok(Some(*mood));
            }
        }
        match choice.parse::<Mood>() {
            Ok(mood) => return Ok(Some(mood)),
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}

/// Reads one line without its terminator; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> AppResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
