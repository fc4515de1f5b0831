use serde::Serialize;

/// Display text substituted for optional lockfile fields that were never set.
pub const NOT_CONFIGURED: &str = "Not configured.";

/// One resolved dependency as declared in the lockfile. Immutable once parsed.
#[derive(Debug, Clone, Serialize)]
pub struct DependencyRecord {
    /// Namespaced package name, e.g. `vendor/package`.
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    /// Repository URL of the package source.
    pub source_url: String,
    /// Full commit/revision identifier; see [`DependencyRecord::short_sha`].
    pub source_reference: String,
    /// Declared license identifiers, in declaration order.
    pub licenses: Option<Vec<String>>,
}

impl DependencyRecord {
    /// License identifiers joined with `", "`, or the placeholder when the
    /// lockfile never declared any. A present-but-empty list joins to the
    /// empty string rather than the placeholder.
    pub fn license_names(&self) -> String {
        match &self.licenses {
            Some(names) => names.join(", "),
            None => NOT_CONFIGURED.to_string(),
        }
    }

    pub fn homepage_text(&self) -> &str {
        self.homepage.as_deref().unwrap_or(NOT_CONFIGURED)
    }

    /// First seven characters of the source reference (the whole value when
    /// shorter). Not rendered in the report line.
    #[allow(dead_code)]
    pub fn short_sha(&self) -> &str {
        self.source_reference.get(..7).unwrap_or(&self.source_reference)
    }
}

/// Per-dependency license resolution outcome, derived during a run and
/// discarded with it.
#[derive(Debug, Default, Serialize)]
pub struct ResolvedLicenseInfo {
    /// First matching license filename under the package directory, if any.
    pub located_file_name: Option<String>,
    /// Browsable URL for the located file. Only set when a file was located
    /// AND the source forge was recognized; a located file on an unknown
    /// forge yields `None`, never a fallback.
    pub resolved_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(licenses: Option<Vec<String>>) -> DependencyRecord {
        DependencyRecord {
            name: "acme/widget".to_string(),
            version: "1.2.0".to_string(),
            description: None,
            homepage: None,
            source_url: "https://github.com/acme/widget.git".to_string(),
            source_reference: "abcdef1234567".to_string(),
            licenses,
        }
    }

    #[test]
    fn test_license_names_joined_in_order() {
        let rec = record(Some(vec!["MIT".to_string(), "Apache-2.0".to_string()]));
        assert_eq!(rec.license_names(), "MIT, Apache-2.0");
    }

    #[test]
    fn test_license_names_placeholder_when_absent() {
        assert_eq!(record(None).license_names(), "Not configured.");
    }

    #[test]
    fn test_license_names_empty_list_joins_to_empty() {
        assert_eq!(record(Some(Vec::new())).license_names(), "");
    }

    #[test]
    fn test_homepage_placeholder() {
        assert_eq!(record(None).homepage_text(), "Not configured.");
    }

    #[test]
    fn test_short_sha_truncates_to_seven() {
        assert_eq!(record(None).short_sha(), "abcdef1");
    }

    #[test]
    fn test_short_sha_keeps_short_references_whole() {
        let mut rec = record(None);
        rec.source_reference = "abc".to_string();
        assert_eq!(rec.short_sha(), "abc");
    }
}
