use crate::models::{DependencyRecord, ResolvedLicenseInfo};

/// Render one report line: `<name>,<@version|empty>,<licenses>,<link-or-homepage>`.
///
/// The record's description and abbreviated source reference are parsed and
/// retained but never rendered; the flat format carries only the four fields
/// consumers key on by position. Embedded commas are not escaped.
pub fn format_record(
    record: &DependencyRecord,
    resolved: &ResolvedLicenseInfo,
    hide_version: bool,
) -> String {
    let version = if hide_version {
        String::new()
    } else {
        format!("@{}", record.version)
    };
    let license = resolved
        .resolved_link
        .as_deref()
        .unwrap_or_else(|| record.homepage_text());

    format!(
        "{},{},{},{}",
        record.name,
        version,
        record.license_names(),
        license
    )
}
