//! Embedded puzzle layouts
//!
//! Raw configuration data compiled into the binary.

use crate::core::{COLS, ROWS};

/// Raw, unvalidated configuration data
pub(crate) struct RawConfiguration {
    pub id: u8,
    pub grid: [[&'static str; COLS]; ROWS],
    pub words: [&'static [&'static str]; ROWS],
}

pub(crate) const CONFIGURATIONS: &[RawConfiguration] = &[
    RawConfiguration {
        id: 1,
        grid: [
            ["ter", "ate", "ble", "der"],
            ["fil", "in", "im", "i"],
            ["i", "late", "mac", "un"],
            ["u", "vis", "af", "wa"],
        ],
        words: [
            &["af", "fil", "i", "ate"],
            &["im", "mac", "u", "late"],
            &["in", "vis", "i", "ble"],
            &["un", "der", "wa", "ter"],
        ],
    },
    RawConfiguration {
        id: 2,
        grid: [
            ["force", "ment", "al", "in"],
            ["for", "ma", "am", "in"],
            ["tive", "ma", "ing", "in"],
            ["ri", "re", "te", "ex"],
        ],
        words: [
            &["ex", "am", "in", "ing"],
            &["re", "in", "force", "ment"],
            &["in", "for", "ma", "tive"],
            &["ma", "te", "ri", "al"],
        ],
    },
    RawConfiguration {
        id: 3,
        grid: [
            ["al", "di", "me", "di"],
            ["cu", "cal", "cal", "me"],
            ["lat", "im", "ing", "i"],
            ["on", "ate", "ag", "chan"],
        ],
        words: [
            &["me", "chan", "i", "cal"],
            &["cal", "cu", "lat", "ing"],
            &["im", "me", "di", "ate"],
            &["di", "ag", "on", "al"],
        ],
    },
];
