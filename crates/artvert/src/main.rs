//! A tool to extract and embed cover art of music in batch.
//!
//! See [`artvert`] documentation for more information.
//!
//! [`artvert`]: https://crates.io/crates/artvert

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

/// A tool to extract and embed cover art of music in batch.
#[derive(Parser)]
#[command(version, about, max_term_width = 80)]
pub struct Opts {
    #[command(flatten)]
    inner: artvert::cli::Artvert,
}

fn main() -> ExitCode {
    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        // Help and version are not errors.
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = artvert::cli::entry(&opts.inner) {
        eprintln!("Error: {e:#}");
        eprintln!("{}", Opts::command().render_usage());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
