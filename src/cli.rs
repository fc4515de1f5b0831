use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "composer-licenses",
    about = "Generate a flat license report from a project's composer.lock",
    version
)]
pub struct Cli {
    /// Path to the composer.lock manifest
    #[arg(long, value_name = "FILE", default_value = "composer.lock")]
    pub manifest: PathBuf,

    /// Directory where installed packages live
    #[arg(long = "vendor-dir", value_name = "DIR", default_value = "vendor")]
    pub vendor_dir: PathBuf,

    /// Omit the @version segment from every report line
    #[arg(long = "hide-version")]
    pub hide_version: bool,
}
