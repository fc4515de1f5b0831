//! `composer-licenses` — emit a flat license report for composer.lock dependencies.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Read the lockfile into dependency records ([`lockfile`]).
//! 3. Per record: find its license file on disk ([`locate`]) and derive a
//!    browsable link when the source lives on a recognized forge ([`link`]).
//! 4. Render one comma-separated line per dependency ([`report`]).
//! 5. Write the joined report to stdout; exit `1` on a lockfile error.

mod cli;
mod error;
mod link;
mod locate;
mod lockfile;
mod models;
mod pipeline;
mod report;

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match pipeline::generate(&cli.manifest, &cli.vendor_dir, cli.hide_version) {
        Ok(text) => {
            // The report carries no trailing newline; write it verbatim.
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            std::process::exit(1);
        }
    }
}
