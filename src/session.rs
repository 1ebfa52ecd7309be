//! Playback session: derived view state recomputed each tick.
//!
//! The session owns the loaded transcript and remembers only the last
//! active index, so the presentation layer can react (scroll the active
//! line into view) exactly when the index changes. Everything else is
//! recomputed from pure lookups on every tick, which keeps seeks and
//! backwards jumps correct with no special casing.

use crate::locator::locate;
use crate::scene::locate_scene;
use crate::transcript::Transcript;

/// Result of advancing the session clock by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Active lyric index, `None` before the first entry.
    pub index: Option<usize>,
    /// Scene label for the current time.
    pub scene: &'static str,
    /// True when `index` differs from the previous tick.
    pub index_changed: bool,
}

/// Tracks the active lyric across playback time updates.
#[derive(Debug, Clone, Default)]
pub struct Session {
    transcript: Transcript,
    active: Option<usize>,
}

impl Session {
    pub fn new(transcript: Transcript) -> Self {
        Self {
            transcript,
            active: None,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Advance to `current_time` and report the active entry.
    ///
    /// Time updates arrive serialized from the playback clock; the value
    /// may jump in either direction on seek.
    pub fn tick(&mut self, current_time: f64) -> Tick {
        let index = locate(&self.transcript, current_time);
        let index_changed = index != self.active;
        self.active = index;
        Tick {
            index,
            scene: locate_scene(current_time),
            index_changed,
        }
    }

    /// Swap in a freshly loaded transcript, dropping the old one wholesale.
    ///
    /// Change tracking resets, so the next tick reports its index as
    /// changed whenever an entry is active.
    pub fn replace(&mut self, transcript: Transcript) {
        self.transcript = transcript;
        self.active = None;
    }
}

/// Format a playback position as `M:SS` for the progress readout.
/// Negative inputs clamp to `0:00`.
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Fraction of the track played, in [0, 1]. Zero until the duration is
/// known (not positive).
pub fn progress(current_time: f64, duration: f64) -> f64 {
    if duration > 0.0 {
        (current_time / duration).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn session() -> Session {
        Session::new(parse("[00:10.000]one\n[00:20.500]two\n[00:35.000]three"))
    }

    #[test]
    fn test_tick_reports_change_on_entry_transitions() {
        let mut session = session();

        let tick = session.tick(0.0);
        assert_eq!(tick.index, None);
        assert!(!tick.index_changed, "no entry was active before or after");

        let tick = session.tick(10.0);
        assert_eq!(tick.index, Some(0));
        assert!(tick.index_changed);

        let tick = session.tick(15.0);
        assert_eq!(tick.index, Some(0));
        assert!(!tick.index_changed, "same entry is still active");

        let tick = session.tick(20.5);
        assert_eq!(tick.index, Some(1));
        assert!(tick.index_changed);
    }

    #[test]
    fn test_backwards_seek_reports_change() {
        let mut session = session();
        session.tick(40.0);

        let tick = session.tick(12.0);
        assert_eq!(tick.index, Some(0));
        assert!(tick.index_changed);

        let tick = session.tick(5.0);
        assert_eq!(tick.index, None);
        assert!(tick.index_changed);
    }

    #[test]
    fn test_tick_includes_scene() {
        let mut session = session();
        assert_eq!(session.tick(10.0).scene, "scene1");
        assert_eq!(session.tick(100.0).scene, "scene5");
    }

    #[test]
    fn test_replace_resets_change_tracking() {
        let mut session = session();
        session.tick(10.0);

        session.replace(parse("[00:05.000]fresh"));
        let tick = session.tick(10.0);
        assert_eq!(tick.index, Some(0));
        assert!(tick.index_changed, "first tick after reload should fire");
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "0:00");
        assert_eq!(format_clock(61.9), "1:01");
        assert_eq!(format_clock(600.0), "10:00");
        assert_eq!(format_clock(-3.0), "0:00");
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress(0.0, 200.0), 0.0);
        assert_eq!(progress(50.0, 200.0), 0.25);
        assert_eq!(progress(250.0, 200.0), 1.0);
        assert_eq!(progress(10.0, 0.0), 0.0, "unknown duration reads as zero");
    }
}
