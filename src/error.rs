use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline errors. Either the whole report is produced or nothing is.
///
/// Per-dependency resolution gaps (no license file on disk, unrecognized
/// forge) are not errors; those lines fall back to the package homepage.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The lockfile is missing, unreadable, or not valid JSON.
    #[error("unable to read lockfile {}: {reason}", path.display())]
    ManifestUnreadable { path: PathBuf, reason: String },

    /// A package entry lacks one of the required fields.
    #[error("package entry `{entry}` is missing required field `{field}`")]
    MalformedEntry { entry: String, field: &'static str },
}
