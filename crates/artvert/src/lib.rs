//! A tool to extract and embed cover art of music in batch.
//!
//! The given directory is recursively scanned for `.mp3` files. Each audio
//! file is paired with a sidecar image which has the same name but a `.jpg`
//! extension, so `album/01 - Intro.mp3` is paired with `album/01 - Intro.jpg`.
//!
//! <br>
//!
//! ## Usage
//!
//! To extract the embedded front cover of every file into its sidecar image:
//!
//! ```sh
//! artvert extract music
//! ```
//!
//! Embedded covers are re-encoded as JPEG, and existing sidecar images are
//! overwritten.
//!
//! To embed sidecar images as the front cover of every file which has one:
//!
//! ```sh
//! artvert update music
//! ```
//!
//! Any existing front covers are replaced, so running it again leaves a single
//! front cover behind.
//!
//! It is generally recommended to first run the command with `--dry-run` or
//! `-D` to get an understanding of what it will try to do:
//!
//! ```sh
//! artvert --dry-run update music
//! ```
//!
//! Files which fail to process are reported, and processing continues with
//! the next file.

pub mod cli;
mod config;
mod cover;
mod extract;
mod out;
mod report;
mod shell;
#[cfg(test)]
mod testing;
mod update;
mod walk;
