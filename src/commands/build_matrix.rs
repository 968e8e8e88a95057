//! Precompute and persist the pattern matrix

use crate::index::{MatrixStoreError, PatternMatrix};
use crate::lexicon::Lexicon;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// What was written
#[derive(Debug, Clone)]
pub struct MatrixSummary {
    pub path: PathBuf,
    pub guesses: usize,
    pub secrets: usize,
    pub checksum: u64,
    pub duration: Duration,
}

/// Build the matrix for `lexicon` and save it to `path`
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn build_matrix(lexicon: &Lexicon, path: &Path, progress: &ProgressBar) -> Result<MatrixSummary, MatrixStoreError> {
    let start = Instant::now();
    let matrix = PatternMatrix::build_with_progress(lexicon, progress);
    matrix.save(path)?;

    Ok(MatrixSummary {
        path: path.to_path_buf(),
        guesses: matrix.guesses(),
        secrets: matrix.secrets(),
        checksum: matrix.checksum(),
        duration: start.elapsed(),
    })
}
