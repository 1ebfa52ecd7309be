//! Transcript data model: timed lyric entries in chronological order.

use serde::{Deserialize, Serialize};

/// One lyric line with its absolute start time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedEntry {
    /// Start time in seconds from the beginning of the track.
    pub time: f64,
    /// Lyric text, trimmed and non-empty.
    pub text: String,
}

/// An immutable ordered sequence of timed lyric entries.
///
/// Entries are non-decreasing by `time`, so index lookups can binary
/// search. A transcript is built once per load and replaced wholesale on
/// reload; it is never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    entries: Vec<TimedEntry>,
}

impl Transcript {
    /// Build a transcript from parsed entries.
    ///
    /// LRC sources are chronological in practice, but the tag order is not
    /// enforced by the format, so entries are stably sorted by time here to
    /// keep lookups correct for out-of-order sources.
    pub fn new(mut entries: Vec<TimedEntry>) -> Self {
        entries.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TimedEntry> {
        self.entries.get(index)
    }

    /// All entries in time order.
    pub fn entries(&self) -> &[TimedEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimedEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a TimedEntry;
    type IntoIter = std::slice::Iter<'a, TimedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
