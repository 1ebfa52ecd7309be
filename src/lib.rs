pub mod error;
pub mod locator;
pub mod parser;
pub mod scene;
pub mod session;
pub mod transcript;

pub use error::*;
pub use locator::locate;
pub use parser::{parse, parse_with_markers, DEFAULT_METADATA_MARKERS};
pub use scene::{locate_scene, SceneBoundary, SceneTable, DEFAULT_SCENES};
pub use session::{format_clock, progress, Session, Tick};
pub use transcript::{TimedEntry, Transcript};

use serde::Serialize;
use std::fs;
use std::path::Path;

/// Everything the presentation layer needs at one playback instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncPoint {
    /// Active lyric index, `None` before the first entry.
    pub index: Option<usize>,
    /// Background scene label for this time.
    pub scene: &'static str,
}

/// Look up the active lyric index and scene label at `current_time`.
/// This is the main per-tick entry point for the library.
pub fn sync(transcript: &Transcript, current_time: f64) -> SyncPoint {
    SyncPoint {
        index: locate(transcript, current_time),
        scene: locate_scene(current_time),
    }
}

/// Load and parse an LRC transcript from disk.
///
/// Parsing itself never fails; only the read can. On failure no transcript
/// is produced and the caller keeps whatever it was displaying.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Transcript, LyrError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| LyrError::TranscriptRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse(&raw))
}
