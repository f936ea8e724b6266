use core::error::Error;
use core::fmt;

use std::path::PathBuf;

/// What went wrong while processing a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailureKind {
    /// The directory walk could not read an entry.
    Walk,
    /// The audio metadata could not be parsed.
    MetadataParse,
    /// The embedded picture could not be decoded.
    ImageDecode,
    /// The decoded picture could not be encoded as a JPEG.
    ImageEncode,
    /// The sidecar image could not be read.
    Read,
    /// The sidecar image could not be written.
    Write,
    /// The updated metadata could not be saved to the audio file.
    Persist,
}

impl fmt::Display for FailureKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Walk => write!(f, "failed to walk directory"),
            FailureKind::MetadataParse => write!(f, "failed to read metadata"),
            FailureKind::ImageDecode => write!(f, "failed to decode cover art"),
            FailureKind::ImageEncode => write!(f, "failed to encode cover art"),
            FailureKind::Read => write!(f, "failed to read image"),
            FailureKind::Write => write!(f, "failed to write image"),
            FailureKind::Persist => write!(f, "failed to save metadata"),
        }
    }
}

/// An error associated with the processing of a single file.
#[derive(Debug)]
pub(crate) struct FileError {
    pub(crate) kind: FailureKind,
    pub(crate) error: anyhow::Error,
}

impl FileError {
    pub(crate) fn new(kind: FailureKind, error: impl Into<anyhow::Error>) -> Self {
        Self {
            kind,
            error: error.into(),
        }
    }
}

impl fmt::Display for FileError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:#}", self.kind, self.error)
    }
}

impl Error for FileError {}

/// Extension to tag a fallible operation with the kind of failure it
/// represents.
pub(crate) trait FailureExt<T> {
    fn or_fail(self, kind: FailureKind) -> Result<T, FileError>;
}

impl<T, E> FailureExt<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    #[inline]
    fn or_fail(self, kind: FailureKind) -> Result<T, FileError> {
        self.map_err(|e| FileError::new(kind, e))
    }
}

/// The successful outcome of processing a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Cover art was written to the given sidecar image.
    Extracted {
        to: PathBuf,
        /// MIME type of the embedded picture, if declared.
        mime: Option<String>,
        width: u32,
        height: u32,
    },
    /// Cover art was embedded from the given sidecar image.
    Updated {
        from: PathBuf,
        /// Size of the embedded image in bytes.
        bytes: usize,
    },
    /// The audio file carries no front cover.
    NoCoverArt,
    /// There is no sidecar image next to the audio file.
    NoSidecar,
}

/// Summary of a batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Report {
    pub(crate) extracted: usize,
    pub(crate) updated: usize,
    pub(crate) skipped: usize,
    pub(crate) failed: usize,
}

impl Report {
    pub(crate) fn record(&mut self, result: &Result<Outcome, FileError>) {
        match result {
            Ok(Outcome::Extracted { .. }) => self.extracted += 1,
            Ok(Outcome::Updated { .. }) => self.updated += 1,
            Ok(Outcome::NoCoverArt | Outcome::NoSidecar) => self.skipped += 1,
            Err(..) => self.failed += 1,
        }
    }

    #[inline]
    pub(crate) fn total(&self) -> usize {
        self.extracted + self.updated + self.skipped + self.failed
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file(s): {} extracted, {} updated, {} skipped, {} failed",
            self.total(),
            self.extracted,
            self.updated,
            self.skipped,
            self.failed
        )
    }
}
