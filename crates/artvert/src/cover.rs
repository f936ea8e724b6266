use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use lofty::picture::{MimeType, Picture, PictureType};
use lofty::tag::Tag;

use crate::report::{FailureExt, FailureKind, FileError};

/// Extension of the audio files being processed.
pub(crate) const AUDIO_EXT: &str = "mp3";
/// Extension of sidecar images.
pub(crate) const SIDECAR_EXT: &str = "jpg";
/// Description given to embedded front covers.
pub(crate) const DESCRIPTION: &str = "Cover";
/// Default quality used when re-encoding extracted cover art.
pub(crate) const DEFAULT_QUALITY: u8 = 75;

/// Get the sidecar image path which corresponds to an audio file.
pub(crate) fn sidecar_path(audio: &Path) -> PathBuf {
    audio.with_extension(SIDECAR_EXT)
}

/// Find the front cover in a tag.
pub(crate) fn front_cover(tag: &Tag) -> Option<&Picture> {
    tag.pictures()
        .iter()
        .find(|p| p.pic_type() == PictureType::CoverFront)
}

/// Construct the front cover picture to embed.
pub(crate) fn front_cover_picture(data: Vec<u8>) -> Picture {
    Picture::new_unchecked(
        PictureType::CoverFront,
        Some(MimeType::Jpeg),
        Some(DESCRIPTION.to_owned()),
        data,
    )
}

/// A cover which has been re-encoded as a JPEG.
pub(crate) struct Jpeg {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data: Vec<u8>,
}

/// Decode arbitrary image data and re-encode it as a JPEG.
///
/// JPEG has no alpha channel, so the image is flattened to RGB first.
pub(crate) fn to_jpeg(data: &[u8], quality: u8) -> Result<Jpeg, FileError> {
    let image = image::load_from_memory(data).or_fail(FailureKind::ImageDecode)?;
    let rgb = image.to_rgb8();

    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut out, quality);

    rgb.write_with_encoder(encoder)
        .or_fail(FailureKind::ImageEncode)?;

    Ok(Jpeg {
        width: rgb.width(),
        height: rgb.height(),
        data: out,
    })
}
