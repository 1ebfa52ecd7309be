use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LyrError {
    #[error("failed to read transcript '{path}': {source}")]
    TranscriptRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid time '{0}': expected seconds as a number")]
    InvalidTime(String),
}
