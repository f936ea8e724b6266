use std::fs::{self, File};
use std::path::Path;

use lofty::config::{ParseOptions, WriteOptions};
use lofty::file::AudioFile;
use lofty::id3::v2::Id3v2Tag;
use lofty::mpeg::MpegFile;
use lofty::picture::PictureType;
use lofty::tag::TagExt;

use crate::config::Config;
use crate::cover;
use crate::report::{FailureExt, FailureKind, FileError, Outcome};

/// Embed the sidecar image of an audio file as its front cover.
///
/// Existing front covers are removed first so that repeated runs leave exactly
/// one.
pub(crate) fn update(config: &Config, path: &Path) -> Result<Outcome, FileError> {
    let from = cover::sidecar_path(path);

    if !from.exists() {
        return Ok(Outcome::NoSidecar);
    }

    let data = fs::read(&from).or_fail(FailureKind::Read)?;
    let bytes = data.len();

    let mut tag = read_id3v2(path)?;

    tag.remove_picture_type(PictureType::CoverFront);
    tag.insert_picture(cover::front_cover_picture(data));

    if !config.dry_run {
        tag.save_to_path(path, WriteOptions::default())
            .or_fail(FailureKind::Persist)?;
    }

    Ok(Outcome::Updated { from, bytes })
}

/// Read the existing ID3v2 tag of an audio file, or an empty one if it has
/// none.
///
/// Reading through the concrete tag keeps frames which have no generic
/// representation intact when the tag is saved again.
fn read_id3v2(path: &Path) -> Result<Id3v2Tag, FileError> {
    let mut file = File::open(path).or_fail(FailureKind::MetadataParse)?;
    let mpeg = MpegFile::read_from(&mut file, ParseOptions::new())
        .or_fail(FailureKind::MetadataParse)?;
    Ok(mpeg.id3v2().cloned().unwrap_or_default())
}
