use std::path::Path;

/// License filenames probed under a package directory, in priority order.
///
/// Both upper- and lowercase spellings appear deliberately: filesystem
/// case-sensitivity varies by platform, and when several files exist the
/// position in this list decides which one wins. Never reorder.
pub const LICENSE_FILE_CANDIDATES: [&str; 7] = [
    "LICENSE.txt",
    "LICENSE.md",
    "LICENSE",
    "license.txt",
    "license.md",
    "license",
    "LICENSE-2.0.txt",
];

/// Find the first candidate license file under `<vendor_root>/<name>/`.
///
/// Existence checks only; contents are never read. Returns the matched
/// filename rather than a full path.
pub fn locate_license_file(vendor_root: &Path, name: &str) -> Option<&'static str> {
    let package_dir = vendor_root.join(name);
    LICENSE_FILE_CANDIDATES
        .iter()
        .copied()
        .find(|candidate| package_dir.join(candidate).exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str, file: &str) {
        let package_dir = dir.join(name);
        fs::create_dir_all(&package_dir).unwrap();
        fs::write(package_dir.join(file), "license text").unwrap();
    }

    #[test]
    fn test_none_when_package_dir_missing() {
        let vendor = tempdir().unwrap();
        assert_eq!(locate_license_file(vendor.path(), "acme/widget"), None);
    }

    #[test]
    fn test_none_when_no_candidate_exists() {
        let vendor = tempdir().unwrap();
        touch(vendor.path(), "acme/widget", "COPYING");
        assert_eq!(locate_license_file(vendor.path(), "acme/widget"), None);
    }

    #[test]
    fn test_finds_single_candidate() {
        let vendor = tempdir().unwrap();
        touch(vendor.path(), "acme/widget", "LICENSE.md");
        assert_eq!(
            locate_license_file(vendor.path(), "acme/widget"),
            Some("LICENSE.md")
        );
    }

    #[test]
    fn test_txt_wins_over_bare_license() {
        let vendor = tempdir().unwrap();
        touch(vendor.path(), "acme/widget", "LICENSE");
        touch(vendor.path(), "acme/widget", "LICENSE.txt");
        assert_eq!(
            locate_license_file(vendor.path(), "acme/widget"),
            Some("LICENSE.txt")
        );
    }

    #[test]
    fn test_apache_notice_name_is_last_resort() {
        let vendor = tempdir().unwrap();
        touch(vendor.path(), "acme/widget", "LICENSE-2.0.txt");
        assert_eq!(
            locate_license_file(vendor.path(), "acme/widget"),
            Some("LICENSE-2.0.txt")
        );
    }

    #[test]
    fn test_namespaced_name_maps_to_nested_directory() {
        let vendor = tempdir().unwrap();
        touch(vendor.path(), "acme/widget", "LICENSE");
        // Sibling package must not shadow it.
        touch(vendor.path(), "acme/gadget", "LICENSE.txt");
        assert_eq!(
            locate_license_file(vendor.path(), "acme/widget"),
            Some("LICENSE")
        );
    }
}
