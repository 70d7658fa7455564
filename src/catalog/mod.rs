//! Puzzle configuration catalog
//!
//! An immutable lookup from configuration id to (initial grid, target words),
//! built once on first access and never mutated afterwards.

mod embedded;

use crate::core::{Grid, TargetWord};
use embedded::{CONFIGURATIONS, RawConfiguration};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Identifier of one catalog configuration (a small positive integer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ConfigId(u8);

impl ConfigId {
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for ConfigId {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for ConfigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for catalog lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    UnknownConfiguration(ConfigId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownConfiguration(id) => {
                let known: Vec<String> = ids().iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "Unknown configuration {id} (available: {})",
                    known.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// One playable puzzle: a starting layout plus the words its rows must spell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    id: ConfigId,
    name: String,
    grid: Grid,
    words: Vec<TargetWord>,
}

impl Configuration {
    /// Create a configuration outside the built-in catalog
    ///
    /// The name is derived from the words. No shape validation is performed
    /// beyond what `Grid` and `TargetWord` already guarantee.
    #[must_use]
    pub fn new(id: ConfigId, grid: Grid, words: Vec<TargetWord>) -> Self {
        let name = words
            .iter()
            .map(TargetWord::text)
            .collect::<Vec<_>>()
            .join(" / ");

        Self {
            id,
            name,
            grid,
            words,
        }
    }

    fn from_raw(raw: &RawConfiguration) -> Self {
        let words = raw
            .words
            .iter()
            .filter_map(|&syllables| TargetWord::new(syllables.iter().copied()).ok())
            .collect();

        Self::new(ConfigId(raw.id), Grid::from_rows(raw.grid), words)
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> ConfigId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The starting layout
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[TargetWord] {
        &self.words
    }
}

static CATALOG: LazyLock<FxHashMap<ConfigId, Configuration>> = LazyLock::new(|| {
    CONFIGURATIONS
        .iter()
        .map(|raw| (ConfigId(raw.id), Configuration::from_raw(raw)))
        .collect()
});

/// The configuration used when none is chosen
pub const DEFAULT_CONFIG: ConfigId = ConfigId(1);

/// Look up a configuration by id
///
/// # Errors
///
/// Returns `CatalogError::UnknownConfiguration` if no configuration has this id.
///
/// # Examples
/// ```
/// use syllable_swap::catalog::{self, ConfigId};
///
/// let config = catalog::get(ConfigId::new(1)).unwrap();
/// assert_eq!(config.words()[0].text(), "affiliate");
///
/// assert!(catalog::get(ConfigId::new(9)).is_err());
/// ```
pub fn get(id: ConfigId) -> Result<&'static Configuration, CatalogError> {
    CATALOG
        .get(&id)
        .ok_or(CatalogError::UnknownConfiguration(id))
}

/// All known configuration ids in ascending order
#[must_use]
pub fn ids() -> Vec<ConfigId> {
    let mut ids: Vec<ConfigId> = CATALOG.keys().copied().collect();
    ids.sort_unstable();
    ids
}

/// All configurations in ascending id order
#[must_use]
pub fn all() -> Vec<&'static Configuration> {
    ids().into_iter().filter_map(|id| CATALOG.get(&id)).collect()
}
