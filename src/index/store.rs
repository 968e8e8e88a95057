//! Persisted pattern matrix
//!
//! Binary layout (little endian):
//!
//! ```text
//! magic     4 bytes  "WTPM"
//! version   u32
//! checksum  u64      lexicon checksum the matrix was built from
//! guesses   u32
//! secrets   u32
//! data      guesses × secrets bytes, row-major by guess
//! ```
//!
//! A file is reused only if its checksum and dimensions match the current
//! lexicon; anything else triggers a rebuild.

use super::PatternMatrix;
use crate::lexicon::Lexicon;
use crate::output::log;
use indicatif::ProgressBar;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

const MAGIC: &[u8; 4] = b"WTPM";
const FORMAT_VERSION: u32 = 1;

/// Failure to read or write a persisted matrix
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum MatrixStoreError {
    #[display("I/O error: {_0}")]
    #[from]
    Io(io::Error),

    #[display("not a pattern matrix file")]
    BadMagic,

    #[display("unsupported matrix format version {version}")]
    UnsupportedVersion { version: u32 },

    #[display("lexicon checksum mismatch (expected {expected:016x}, found {found:016x})")]
    ChecksumMismatch { expected: u64, found: u64 },

    #[display(
        "matrix is {found_guesses}x{found_secrets} but the lexicon is {expected_guesses}x{expected_secrets}"
    )]
    DimensionMismatch {
        expected_guesses: usize,
        expected_secrets: usize,
        found_guesses: usize,
        found_secrets: usize,
    },

    #[display("matrix file is truncated or corrupt")]
    Truncated,
}

impl PatternMatrix {
    /// Write the matrix to `path`
    ///
    /// # Errors
    /// Returns `MatrixStoreError::Io` if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), MatrixStoreError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Serialize into any writer
    ///
    /// # Errors
    /// Propagates write failures.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), MatrixStoreError> {
        writer.write_all(MAGIC)?;
        writer.write_all(&FORMAT_VERSION.to_le_bytes())?;
        writer.write_all(&self.checksum().to_le_bytes())?;
        writer.write_all(&(self.guesses() as u32).to_le_bytes())?;
        writer.write_all(&(self.secrets() as u32).to_le_bytes())?;
        writer.write_all(self.data())?;
        Ok(())
    }

    /// Load the matrix stored at `path`, verifying it belongs to `lexicon`
    ///
    /// # Errors
    /// Returns an error if the file is missing, malformed, or was built from
    /// a different lexicon.
    pub fn load(path: impl AsRef<Path>, lexicon: &Lexicon) -> Result<Self, MatrixStoreError> {
        let mut reader = BufReader::new(File::open(path)?);
        Self::read_from(&mut reader, lexicon)
    }

    /// Deserialize from any reader, verifying it belongs to `lexicon`
    ///
    /// # Errors
    /// Same conditions as [`Self::load`].
    pub fn read_from<R: Read>(reader: &mut R, lexicon: &Lexicon) -> Result<Self, MatrixStoreError> {
        let mut magic = [0u8; 4];
        read_exact(reader, &mut magic)?;
        if &magic != MAGIC {
            return Err(MatrixStoreError::BadMagic);
        }

        let version = read_u32(reader)?;
        if version != FORMAT_VERSION {
            return Err(MatrixStoreError::UnsupportedVersion { version });
        }

        let found = read_u64(reader)?;
        if found != lexicon.checksum() {
            return Err(MatrixStoreError::ChecksumMismatch {
                expected: lexicon.checksum(),
                found,
            });
        }

        let found_guesses = read_u32(reader)? as usize;
        let found_secrets = read_u32(reader)? as usize;
        let expected_guesses = lexicon.guesses().len();
        let expected_secrets = lexicon.secrets().len();
        if (found_guesses, found_secrets) != (expected_guesses, expected_secrets) {
            return Err(MatrixStoreError::DimensionMismatch {
                expected_guesses,
                expected_secrets,
                found_guesses,
                found_secrets,
            });
        }

        let mut data = vec![0u8; found_guesses * found_secrets];
        read_exact(reader, &mut data)?;

        Self::from_parts(found, found_guesses, found_secrets, data).ok_or(MatrixStoreError::Truncated)
    }
}

/// Load the matrix cached at `path`, or build and cache a fresh one
///
/// A missing file is expected on first use; a stale or corrupt one is reported
/// and replaced. Failing to write the cache only costs the next run a rebuild.
pub fn load_or_build(path: &Path, lexicon: &Lexicon, progress: &ProgressBar) -> PatternMatrix {
    match PatternMatrix::load(path, lexicon) {
        Ok(matrix) => {
            log::info(format!("loaded pattern matrix from {}", path.display()));
            return matrix;
        }
        Err(MatrixStoreError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            log::info(format!("no pattern matrix at {}; building", path.display()));
        }
        Err(e) => {
            log::warn(format!("discarding pattern matrix at {}: {e}; rebuilding", path.display()));
        }
    }

    let matrix = PatternMatrix::build_with_progress(lexicon, progress);
    if let Err(e) = matrix.save(path) {
        log::warn(format!("could not cache pattern matrix at {}: {e}", path.display()));
    }
    matrix
}

fn read_exact<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<(), MatrixStoreError> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => MatrixStoreError::Truncated,
        _ => MatrixStoreError::Io(e),
    })
}

fn read_u32<R: Read>(reader: &mut R) -> Result<u32, MatrixStoreError> {
    let mut buf = [0u8; 4];
    read_exact(reader, &mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_u64<R: Read>(reader: &mut R) -> Result<u64, MatrixStoreError> {
    let mut buf = [0u8; 8];
    read_exact(reader, &mut buf)?;
    Ok(u64::from_le_bytes(buf))
}
