use std::path::Path;

use crate::error::ReportError;
use crate::models::ResolvedLicenseInfo;
use crate::{link, locate, lockfile, report};

/// Run the whole pipeline: read the lockfile, resolve each dependency's
/// license reference, and return the joined report.
///
/// Lines appear in lockfile order, separated by a single `\n` with no
/// trailing newline and no header. A lockfile error aborts the run with
/// nothing produced; a dependency without a license file (or on an
/// unrecognized forge) degrades to its homepage on that line only.
pub fn generate(
    manifest: &Path,
    vendor_root: &Path,
    hide_version: bool,
) -> Result<String, ReportError> {
    let records = lockfile::read_dependencies(manifest)?;

    let lines: Vec<String> = records
        .iter()
        .map(|record| {
            let located = locate::locate_license_file(vendor_root, &record.name);
            let resolved = ResolvedLicenseInfo {
                // No file located means no link resolution at all.
                resolved_link: located
                    .and_then(|file| link::resolve_license_link(&record.source_url, file)),
                located_file_name: located.map(str::to_string),
            };
            report::format_record(record, &resolved, hide_version)
        })
        .collect();

    Ok(lines.join("\n"))
}
