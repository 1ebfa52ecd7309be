//! # LRC Transcript Parser
//!
//! Parses line-oriented LRC lyric text into a [`Transcript`].
//!
//! ## Format
//! One logical entry per line, tagged `[MM:SS.F]text`:
//! - `MM` and `SS` are exactly two digits each
//! - `F` is one or more fraction digits of arbitrary length
//! - everything after the tag is the lyric text
//!
//! ## Parsing Rules
//! - Only the first tag on a line is recognized and stripped; brackets
//!   elsewhere in the line are ordinary text.
//! - The fraction digit string is normalized to exactly three digits
//!   (right-padded with zeros or truncated), yielding milliseconds: a
//!   one-digit fraction `5` means 500 ms, not 5 ms.
//! - Lines without a valid tag are skipped.
//! - Lines whose remaining text is empty after trimming, or contains a
//!   production-credit marker (lyricist, composer, and so on), are
//!   skipped. These share the tag format but are not performable lyrics.
//!
//! Skipped lines are not errors: malformed input simply yields a smaller
//! (possibly empty) transcript.
//!
//! ## Entry Point
//! `parse(raw: &str) -> Transcript`

use crate::transcript::{TimedEntry, Transcript};
use std::ops::Range;

/// Credit/production-role markers excluded from the transcript by default.
///
/// These are the metadata words LRC files commonly carry on timed lines
/// (lyricist, composer, arranger, recording, mixing, mastering, cover art,
/// backing vocals).
pub const DEFAULT_METADATA_MARKERS: &[&str] = &[
    "作词", "作曲", "编曲", "录音", "混音", "母带", "封面", "和声",
];

/// Parse LRC source text into a transcript, using the default metadata
/// marker denylist. This is the main entry point for transcript loading.
pub fn parse(raw: &str) -> Transcript {
    parse_with_markers(raw, DEFAULT_METADATA_MARKERS)
}

/// Parse LRC source text, excluding lines that contain any of `markers`.
pub fn parse_with_markers(raw: &str, markers: &[&str]) -> Transcript {
    let mut entries = Vec::new();

    for line in raw.split('\n') {
        let Some((time, tag)) = match_time_tag(line) else {
            continue;
        };

        let mut remainder = String::with_capacity(line.len() - tag.len());
        remainder.push_str(&line[..tag.start]);
        remainder.push_str(&line[tag.end..]);
        let text = remainder.trim();

        if text.is_empty() || markers.iter().any(|m| text.contains(m)) {
            continue;
        }

        entries.push(TimedEntry {
            time,
            text: text.to_string(),
        });
    }

    Transcript::new(entries)
}

/// Find the first `[MM:SS.F]` tag in `line`, returning the decoded time in
/// seconds and the byte range of the tag.
fn match_time_tag(line: &str) -> Option<(f64, Range<usize>)> {
    let bytes = line.as_bytes();
    let mut from = 0;

    while let Some(rel) = line[from..].find('[') {
        let open = from + rel;
        if let Some((time, end)) = read_tag(bytes, open) {
            return Some((time, open..end));
        }
        from = open + 1;
    }

    None
}

/// Decode a tag starting at the `[` at `open`. Returns the time and the
/// byte index one past the closing `]`.
fn read_tag(bytes: &[u8], open: usize) -> Option<(f64, usize)> {
    let mut i = open + 1;

    let minutes = read_two_digits(bytes, i)?;
    i += 2;
    if bytes.get(i) != Some(&b':') {
        return None;
    }
    i += 1;

    let seconds = read_two_digits(bytes, i)?;
    i += 2;
    if bytes.get(i) != Some(&b'.') {
        return None;
    }
    i += 1;

    let fraction_start = i;
    while bytes.get(i).is_some_and(|b| b.is_ascii_digit()) {
        i += 1;
    }
    if i == fraction_start || bytes.get(i) != Some(&b']') {
        return None;
    }

    let millis = normalize_millis(&bytes[fraction_start..i]);
    let time = f64::from(minutes) * 60.0 + f64::from(seconds) + f64::from(millis) / 1000.0;
    Some((time, i + 1))
}

fn read_two_digits(bytes: &[u8], at: usize) -> Option<u32> {
    match (bytes.get(at), bytes.get(at + 1)) {
        (Some(&a), Some(&b)) if a.is_ascii_digit() && b.is_ascii_digit() => {
            Some(u32::from(a - b'0') * 10 + u32::from(b - b'0'))
        }
        _ => None,
    }
}

/// Normalize a fraction digit string to milliseconds in [0, 999].
///
/// The first three digits are kept; shorter strings are right-padded with
/// zeros, so `"5"` is 500 ms and `"5000"` truncates to 500 ms.
fn normalize_millis(digits: &[u8]) -> u32 {
    let mut millis = 0;
    for slot in 0..3 {
        let d = digits.get(slot).map_or(0, |&b| u32::from(b - b'0'));
        millis = millis * 10 + d;
    }
    millis
}
