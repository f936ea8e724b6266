use core::cell::Cell;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use termcolor::{ColorChoice, StandardStream};

use crate::config::{Action, Config};
use crate::cover;
use crate::out::{Colors, Out, blank, error, info, warn};
use crate::report::{FailureKind, FileError, Outcome, Report};
use crate::shell;
use crate::walk::{self, AudioFiles};

/// A tool to extract and embed cover art of music in batch.
#[derive(Parser)]
pub struct Artvert {
    /// If set, performs a dry run without writing any files. This also implies
    /// verbose.
    #[arg(short = 'D', long)]
    dry_run: bool,
    /// If set, enables verbose output.
    #[arg(short = 'v', long)]
    verbose: bool,
    /// Quality in the range 1 to 100 to use when encoding extracted cover art.
    #[arg(short = 'q', long, default_value_t = cover::DEFAULT_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,
    /// The extension to use for partial sidecar images.
    ///
    /// Images are written to these files first, and renamed once they have been
    /// completely written.
    #[arg(long, default_value = "part")]
    part_ext: String,
    /// Action to perform.
    #[arg(ignore_case = true)]
    action: Action,
    /// Directory to recursively scan for audio files.
    directory: PathBuf,
}

/// Entry for `artvert`.
///
/// See [`crate`] documentation.
pub fn entry(opts: &Artvert) -> Result<()> {
    // Current indentation level for output.
    let indent = Cell::new(0);

    let config = Config {
        action: opts.action,
        directory: opts.directory.clone(),
        dry_run: opts.dry_run,
        verbose: opts.verbose || opts.dry_run,
        quality: opts.quality,
        part_ext: opts.part_ext.clone(),
    };

    let cols = Colors::new();

    let o = StandardStream::stdout(ColorChoice::Auto);
    let mut o = o.lock();
    let mut o = Out::new(config.verbose, &indent, &cols, &mut o);
    run(&mut o, &config)?;
    Ok(())
}

/// Run a batch, reporting on each file as it is processed.
///
/// Only an invalid directory aborts the batch, failures of individual files
/// are reported and counted.
pub(crate) fn run(o: &mut Out<'_>, config: &Config) -> Result<Report> {
    let files = AudioFiles::new(&config.directory, cover::AUDIO_EXT)?;

    let mut report = Report::default();

    if config.dry_run {
        warn!(o, "Dry run, no files will be written");
    }

    for path in files {
        let result = match &path {
            Ok(path) => config.process(path),
            Err(e) => Err(FileError::new(FailureKind::Walk, anyhow::anyhow!("{e}"))),
        };

        let path = match &path {
            Ok(path) => Some(path.as_path()),
            Err(e) => walk::error_path(e),
        };

        emit(o, config, path, &result)?;
        report.record(&result);
    }

    info!(o, "Finished {}: {report}", config.action);
    Ok(report)
}

fn emit(
    o: &mut Out<'_>,
    config: &Config,
    path: Option<&Path>,
    result: &Result<Outcome, FileError>,
) -> Result<()> {
    let display = path.map(|p| shell::escape(p.as_os_str()));
    let display = display.as_deref().unwrap_or("<unknown>");

    match result {
        Ok(Outcome::Extracted {
            to,
            mime,
            width,
            height,
        }) => {
            let to = shell::escape(to.as_os_str());

            if config.dry_run {
                info!(o, "Would extract cover art: {to}");
            } else {
                info!(o, "Extracted cover art: {to}");
            }

            let mut o = o.indent(1);
            blank!(o => v, "from : {display}");
            blank!(o => v, "mime : {}", mime.as_deref().unwrap_or("<none>"));
            blank!(o => v, "size : {width}x{height}");
        }
        Ok(Outcome::Updated { from, bytes }) => {
            if config.dry_run {
                info!(o, "Would update cover art for: {display}");
            } else {
                info!(o, "Updated cover art for: {display}");
            }

            let mut o = o.indent(1);
            blank!(o => v, "from : {}", shell::escape(from.as_os_str()));
            blank!(o => v, "size : {bytes} bytes");
        }
        Ok(Outcome::NoCoverArt) => {
            warn!(o, "No cover art found in: {display}");
        }
        Ok(Outcome::NoSidecar) => {
            warn!(o, "No corresponding image found for: {display}");
        }
        Err(e) => {
            error!(o, "Error processing: {display}");
            let mut o = o.indent(1);
            error!(o, "{e}");
        }
    }

    Ok(())
}
