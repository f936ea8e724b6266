use std::fs;
use std::path::Path;

use lofty::file::TaggedFileExt;
use lofty::tag::TagType;

use crate::config::Config;
use crate::cover;
use crate::report::{FailureExt, FailureKind, FileError, Outcome};

/// Extract the front cover of an audio file into its sidecar image.
///
/// The audio file itself is never modified. An existing sidecar image is
/// overwritten.
pub(crate) fn extract(config: &Config, path: &Path) -> Result<Outcome, FileError> {
    let file = lofty::read_from_path(path).or_fail(FailureKind::MetadataParse)?;

    let Some(picture) = file.tag(TagType::Id3v2).and_then(cover::front_cover) else {
        return Ok(Outcome::NoCoverArt);
    };

    let jpeg = cover::to_jpeg(picture.data(), config.quality)?;
    let to = cover::sidecar_path(path);

    if !config.dry_run {
        write_sidecar(config, &to, &jpeg.data)?;
    }

    Ok(Outcome::Extracted {
        to,
        mime: picture.mime_type().map(|m| m.as_str().to_owned()),
        width: jpeg.width,
        height: jpeg.height,
    })
}

/// Write a sidecar image through a partial file which is renamed into place.
fn write_sidecar(config: &Config, to: &Path, data: &[u8]) -> Result<(), FileError> {
    let part = to.with_added_extension(&config.part_ext);

    let result = fs::write(&part, data).and_then(|()| fs::rename(&part, to));

    if let Err(e) = result {
        _ = fs::remove_file(&part);
        return Err(FileError::new(FailureKind::Write, e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use lofty::config::WriteOptions;
    use lofty::picture::{MimeType, Picture, PictureType};
    use lofty::tag::{Tag, TagExt, TagType};
    use tempfile::tempdir;

    use crate::config::{Action, Config};
    use crate::report::{FailureKind, Outcome};
    use crate::testing;

    use super::extract;

    fn embed(path: &std::path::Path, picture: Picture) {
        let mut tag = Tag::new(TagType::Id3v2);
        tag.push_picture(picture);
        tag.save_to_path(path, WriteOptions::default()).unwrap();
    }

    #[test]
    fn test_extract_without_cover() {
        let tmp = tempdir().unwrap();
        let mp3 = tmp.path().join("song.mp3");
        testing::write_mp3(&mp3);

        let config = Config::new(Action::Extract, tmp.path());
        assert_eq!(extract(&config, &mp3).unwrap(), Outcome::NoCoverArt);
        assert!(!tmp.path().join("song.jpg").exists());
    }

    #[test]
    fn test_extract_png_cover_as_jpeg() {
        let tmp = tempdir().unwrap();
        let mp3 = tmp.path().join("song.mp3");
        testing::write_mp3(&mp3);

        embed(
            &mp3,
            Picture::new_unchecked(
                PictureType::CoverFront,
                Some(MimeType::Png),
                None,
                testing::png(20, 10),
            ),
        );

        let before = fs::read(&mp3).unwrap();
        let config = Config::new(Action::Extract, tmp.path());
        let outcome = extract(&config, &mp3).unwrap();

        let to = tmp.path().join("song.jpg");

        assert_eq!(
            outcome,
            Outcome::Extracted {
                to: to.clone(),
                mime: Some("image/png".to_owned()),
                width: 20,
                height: 10,
            }
        );

        let data = fs::read(&to).unwrap();
        assert_eq!(
            image::guess_format(&data).unwrap(),
            image::ImageFormat::Jpeg
        );

        let image = image::load_from_memory(&data).unwrap();
        assert_eq!((image.width(), image.height()), (20, 10));

        assert_eq!(fs::read(&mp3).unwrap(), before);
        assert!(!tmp.path().join("song.jpg.part").exists());
    }

    #[test]
    fn test_extract_overwrites_sidecar() {
        let tmp = tempdir().unwrap();
        let mp3 = tmp.path().join("song.mp3");
        testing::write_mp3(&mp3);
        embed(&mp3, crate::cover::front_cover_picture(testing::jpeg(8, 8)));

        let to = tmp.path().join("song.jpg");
        fs::write(&to, b"stale").unwrap();

        let config = Config::new(Action::Extract, tmp.path());
        extract(&config, &mp3).unwrap();

        let image = image::load_from_memory(&fs::read(&to).unwrap()).unwrap();
        assert_eq!((image.width(), image.height()), (8, 8));
    }

    #[test]
    fn test_extract_undecodable_cover() {
        let tmp = tempdir().unwrap();
        let mp3 = tmp.path().join("song.mp3");
        testing::write_mp3(&mp3);
        embed(&mp3, crate::cover::front_cover_picture(b"garbage".to_vec()));

        let config = Config::new(Action::Extract, tmp.path());
        let e = extract(&config, &mp3).unwrap_err();

        assert_eq!(e.kind, FailureKind::ImageDecode);
        assert!(!tmp.path().join("song.jpg").exists());
    }

    #[test]
    fn test_extract_dry_run_writes_nothing() {
        let tmp = tempdir().unwrap();
        let mp3 = tmp.path().join("song.mp3");
        testing::write_mp3(&mp3);
        embed(&mp3, crate::cover::front_cover_picture(testing::jpeg(4, 4)));

        let mut config = Config::new(Action::Extract, tmp.path());
        config.dry_run = true;

        let outcome = extract(&config, &mp3).unwrap();
        assert!(matches!(outcome, Outcome::Extracted { .. }));
        assert!(!tmp.path().join("song.jpg").exists());
    }
}
