use core::fmt;

use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::cover;
use crate::extract;
use crate::report::{FileError, Outcome};
use crate::update;

const PART: &str = "part";

/// The batch operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Extract embedded cover art into sidecar images.
    Extract,
    /// Embed sidecar images as cover art.
    Update,
}

impl fmt::Display for Action {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Extract => write!(f, "extract"),
            Action::Update => write!(f, "update"),
        }
    }
}

/// Configuration for a batch.
pub(crate) struct Config {
    pub(crate) action: Action,
    pub(crate) directory: PathBuf,
    pub(crate) dry_run: bool,
    pub(crate) verbose: bool,
    pub(crate) quality: u8,
    pub(crate) part_ext: String,
}

impl Config {
    pub(crate) fn new(action: Action, directory: impl Into<PathBuf>) -> Self {
        Self {
            action,
            directory: directory.into(),
            dry_run: false,
            verbose: false,
            quality: cover::DEFAULT_QUALITY,
            part_ext: PART.to_owned(),
        }
    }

    /// Process a single audio file according to the configured action.
    pub(crate) fn process(&self, path: &Path) -> Result<Outcome, FileError> {
        match self.action {
            Action::Extract => extract::extract(self, path),
            Action::Update => update::update(self, path),
        }
    }
}
