const GITHUB_PREFIX: &str = "https://github.com/";
const GIT_SUFFIX: &str = ".git";

/// Derive a browsable URL for a located license file from the package's
/// repository URL.
///
/// Only GitHub is recognized, and the branch segment is always `master`;
/// anything else yields `None` and the caller falls back to the package
/// homepage. Intentionally narrow: no branch probing, no other forges.
pub fn resolve_license_link(source_url: &str, file_name: &str) -> Option<String> {
    let url = source_url.strip_suffix(GIT_SUFFIX).unwrap_or(source_url);
    url.starts_with(GITHUB_PREFIX)
        .then(|| format!("{url}/blob/master/{file_name}"))
}
