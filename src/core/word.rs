//! Target word representation
//!
//! A target word is the ordered syllable sequence one row should spell.

use super::{COLS, Syllable};
use serde::Serialize;
use std::fmt;

/// An ordered sequence of syllables forming one answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetWord {
    syllables: Vec<Syllable>,
}

/// Error type for invalid target words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    TooLong(usize),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must have at least one syllable"),
            Self::TooLong(len) => {
                write!(f, "Word must have at most {COLS} syllables, got {len}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl TargetWord {
    /// Create a new word from its syllables
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - There are no syllables
    /// - There are more syllables than a row has cells
    ///
    /// # Examples
    /// ```
    /// use syllable_swap::core::TargetWord;
    ///
    /// let word = TargetWord::new(["un", "der", "wa", "ter"]).unwrap();
    /// assert_eq!(word.text(), "underwater");
    ///
    /// assert!(TargetWord::new(Vec::<&str>::new()).is_err());
    /// ```
    pub fn new<I, S>(syllables: I) -> Result<Self, WordError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Syllable>,
    {
        let syllables: Vec<Syllable> = syllables.into_iter().map(Into::into).collect();

        if syllables.is_empty() {
            return Err(WordError::Empty);
        }
        if syllables.len() > COLS {
            return Err(WordError::TooLong(syllables.len()));
        }

        Ok(Self { syllables })
    }

    #[inline]
    #[must_use]
    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    /// Number of syllables (never zero)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// The syllables joined into the spelled word
    #[must_use]
    pub fn text(&self) -> String {
        self.syllables.iter().map(Syllable::as_str).collect()
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
