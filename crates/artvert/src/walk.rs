use core::error::Error;
use core::fmt;

use std::path::{Path, PathBuf};

use ignore::{Walk, WalkBuilder};

/// The root given to a batch is not a directory.
#[derive(Debug)]
pub(crate) struct InvalidDirectory(pub(crate) PathBuf);

impl fmt::Display for InvalidDirectory {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a valid directory", self.0.display())
    }
}

impl Error for InvalidDirectory {}

/// Recursive, single-pass iterator over audio files under a directory.
///
/// Hidden files and ignore files are not respected, every subdirectory is
/// visited.
pub(crate) struct AudioFiles {
    walk: Walk,
    suffix: String,
}

impl AudioFiles {
    /// Start walking `root` for files whose name ends with `.<ext>`, compared
    /// case-insensitively.
    pub(crate) fn new(root: &Path, ext: &str) -> Result<Self, InvalidDirectory> {
        if !root.is_dir() {
            return Err(InvalidDirectory(root.to_path_buf()));
        }

        let walk = WalkBuilder::new(root).standard_filters(false).build();

        Ok(Self {
            walk,
            suffix: format!(".{ext}"),
        })
    }

    fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };

        let name = name.as_encoded_bytes();
        let suffix = self.suffix.as_bytes();

        name.len() >= suffix.len()
            && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
    }
}

impl Iterator for AudioFiles {
    type Item = Result<PathBuf, ignore::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e)),
            };

            let path = entry.path();

            if path.is_file() && self.matches(path) {
                return Some(Ok(entry.into_path()));
            }
        }
    }
}

/// Get the path a walk error is associated with, if any.
pub(crate) fn error_path(e: &ignore::Error) -> Option<&Path> {
    match e {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::Loop { child, .. } => Some(child),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Partial(errors) => errors.iter().find_map(error_path),
        _ => None,
    }
}
