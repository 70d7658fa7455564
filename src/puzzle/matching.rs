//! Row-by-word matching
//!
//! Credit is given for a contiguous prefix of a row that agrees with some
//! target word. A correct syllable after a broken prefix earns nothing, since
//! rows are read left to right.
//!
//! # Algorithm
//! 1. For every row and every word, count the leading syllables that agree
//!    (zero unless the first syllables match)
//! 2. A non-zero count marks that many leading cells and locks the row; marks
//!    from several words accumulate
//! 3. Rows that no word locked are cleared

use crate::core::{CorrectnessMap, Grid, ROWS, Syllable, TargetWord};

/// Length of the leading run where `row` agrees with `word`
///
/// Returns 0 when the first syllables differ. Comparison stops at the end of
/// the word, so cells beyond a short word are ignored.
#[must_use]
pub fn matched_prefix_len(row: &[Syllable], word: &TargetWord) -> usize {
    row.iter()
        .zip(word.syllables())
        .take_while(|(cell, expected)| cell == expected)
        .count()
}

/// Whether `row` spells `word` over the word's full length
#[must_use]
pub fn row_spells(row: &[Syllable], word: &TargetWord) -> bool {
    word.len() <= row.len() && matched_prefix_len(row, word) == word.len()
}

/// Compute the correctness map for `grid` against `words`
#[must_use]
pub fn correct_positions(grid: &Grid, words: &[TargetWord]) -> CorrectnessMap {
    let mut map = CorrectnessMap::default();
    let mut locked = [false; ROWS];

    for (row_index, row) in grid.rows().iter().enumerate() {
        for word in words {
            let matched = matched_prefix_len(row, word);
            if matched > 0 {
                for col in 0..matched {
                    map.mark(row_index, col);
                }
                locked[row_index] = true;
            }
        }
    }

    for (row_index, is_locked) in locked.into_iter().enumerate() {
        if !is_locked {
            map.clear_row(row_index);
        }
    }

    map
}

/// True iff every word is spelled by at least one row
#[must_use]
pub fn all_words_spelled(grid: &Grid, words: &[TargetWord]) -> bool {
    words
        .iter()
        .all(|word| grid.rows().iter().any(|row| row_spells(row, word)))
}
