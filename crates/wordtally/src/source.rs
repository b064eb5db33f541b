//! Reading token sources.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::counts::WordCounts;

#[derive(Debug, Error)]
pub enum TallyError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Tally every whitespace-separated token produced by `reader`.
pub fn tally_reader<R: BufRead>(reader: R) -> std::io::Result<WordCounts> {
    let mut counts = WordCounts::new();
    for line in reader.lines() {
        for word in line?.split_whitespace() {
            counts.record(word);
        }
    }
    Ok(counts)
}

/// Tally the file at `path`. A missing or unreadable file is an error.
pub fn tally_file(path: impl AsRef<Path>) -> Result<WordCounts, TallyError> {
    let path = path.as_ref();
    let io_err = |source| TallyError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let counts = tally_reader(BufReader::new(file)).map_err(io_err)?;

    tracing::debug!(
        path = %path.display(),
        distinct = counts.len(),
        total = counts.total(),
        "tallied words"
    );
    Ok(counts)
}
