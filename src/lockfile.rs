use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ReportError;
use crate::models::DependencyRecord;

/// Raw lockfile shape as it appears on disk. Every field is optional here so
/// a missing required field surfaces as a precise [`ReportError::MalformedEntry`]
/// instead of a blanket deserialization failure.
#[derive(Debug, Deserialize)]
struct RawLockfile {
    #[serde(default)]
    packages: Vec<RawPackage>,
}

#[derive(Debug, Deserialize)]
struct RawPackage {
    name: Option<String>,
    version: Option<String>,
    description: Option<String>,
    homepage: Option<String>,
    license: Option<Vec<String>>,
    source: Option<RawSource>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    url: Option<String>,
    reference: Option<String>,
}

/// Read and validate the lockfile at `path`.
///
/// The returned records preserve the order of the `packages` array, which is
/// also the order of the final report. All-or-nothing: any unreadable file or
/// malformed entry fails the whole read.
pub fn read_dependencies(path: &Path) -> Result<Vec<DependencyRecord>, ReportError> {
    let content = fs::read_to_string(path).map_err(|err| ReportError::ManifestUnreadable {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    parse_lockfile(&content, path)
}

fn parse_lockfile(content: &str, path: &Path) -> Result<Vec<DependencyRecord>, ReportError> {
    let raw: RawLockfile =
        serde_json::from_str(content).map_err(|err| ReportError::ManifestUnreadable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

    raw.packages
        .into_iter()
        .enumerate()
        .map(|(index, entry)| build_record(index, entry))
        .collect()
}

fn build_record(index: usize, raw: RawPackage) -> Result<DependencyRecord, ReportError> {
    // Label errors with the entry name when we have one, its position otherwise.
    let entry = raw.name.clone().unwrap_or_else(|| format!("#{index}"));

    let source = raw.source.ok_or_else(|| ReportError::MalformedEntry {
        entry: entry.clone(),
        field: "source",
    })?;

    Ok(DependencyRecord {
        name: require(raw.name, &entry, "name")?,
        version: require(raw.version, &entry, "version")?,
        description: raw.description,
        homepage: raw.homepage,
        source_url: require(source.url, &entry, "source.url")?,
        source_reference: require(source.reference, &entry, "source.reference")?,
        licenses: raw.license,
    })
}

/// Required fields must be present and non-empty.
fn require(
    value: Option<String>,
    entry: &str,
    field: &'static str,
) -> Result<String, ReportError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ReportError::MalformedEntry {
            entry: entry.to_string(),
            field,
        }),
    }
}
