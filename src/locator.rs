//! Temporal locator: maps a playback time to the active lyric entry.

use crate::transcript::Transcript;

/// Return the index of the last entry whose time is at or before
/// `current_time`, the entry currently active for highlighting.
///
/// `None` means no entry is active yet: the transcript is empty or
/// `current_time` precedes the first entry. Past the final entry the last
/// index stays active.
///
/// Pure function of its inputs, called on every playback tick, so it
/// binary searches the ordered times rather than scanning.
pub fn locate(transcript: &Transcript, current_time: f64) -> Option<usize> {
    let active_count = transcript
        .entries()
        .partition_point(|entry| entry.time <= current_time);
    active_count.checked_sub(1)
}
