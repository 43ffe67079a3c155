use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use anyhow::Result;

pub mod classifier;
pub mod corpus;
pub mod extractor;
pub mod library;

// Re-export main entry points
pub use classifier::{Classifier, CustomLicense, DEFAULT_CONFIDENCE_THRESHOLD};
pub use library::{LibrarySource, ProjectPaths, UvLibraries, find_site_packages_path};

/// Compliance bucket a license falls into.
///
/// Only `Forbidden` and `Restricted` drive policy today; every other
/// bucket is treated as allowed, including any added later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum LicenseType {
    Forbidden,
    Restricted,
    Reciprocal,
    Permissive,
    Unencumbered,
    Unknown,
}

impl fmt::Display for LicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LicenseType::Forbidden => "Forbidden",
            LicenseType::Restricted => "Restricted",
            LicenseType::Reciprocal => "Reciprocal",
            LicenseType::Permissive => "Permissive",
            LicenseType::Unencumbered => "Unencumbered",
            LicenseType::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// An installed distribution discovered from the lock file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Library {
    pub name: String,
    pub version: Option<String>,
    pub license_path: Option<PathBuf>,
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}=={}", self.name, version),
            None => f.write_str(&self.name),
        }
    }
}

/// Anything able to name and categorise a license file.
pub trait Identify {
    /// Returns the license id and its category for the file at `license_path`.
    fn identify(&self, license_path: &Path) -> Result<(String, LicenseType)>;

    /// Whether `text` reads like a license at all. Enumeration uses this to
    /// accept README or NOTICE files that embed the license.
    fn detects_license(&self, _text: &str) -> bool {
        false
    }
}

/// PEP 503 name normalisation: lowercase, runs of `-`, `_` and `.` become `-`.
pub fn normalize_package_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut in_separator = false;

    for c in name.trim().chars() {
        if matches!(c, '-' | '_' | '.') {
            if !in_separator {
                normalized.push('-');
                in_separator = true;
            }
        } else {
            normalized.extend(c.to_lowercase());
            in_separator = false;
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_descriptor() {
        let lib = Library {
            name: "requests".to_string(),
            version: Some("2.31.0".to_string()),
            license_path: None,
        };
        assert_eq!(lib.to_string(), "requests==2.31.0");

        let lib = Library { version: None, ..lib };
        assert_eq!(lib.to_string(), "requests");
    }

    #[test]
    fn test_license_type_display_matches_serde_names() {
        assert_eq!(LicenseType::Forbidden.to_string(), "Forbidden");
        assert_eq!(LicenseType::Restricted.to_string(), "Restricted");

        let parsed: LicenseType = serde_json::from_str("\"Unencumbered\"").unwrap();
        assert_eq!(parsed, LicenseType::Unencumbered);
    }

    #[test]
    fn test_normalize_package_name() {
        assert_eq!(normalize_package_name("Typing_Extensions"), "typing-extensions");
        assert_eq!(normalize_package_name("zope.interface"), "zope-interface");
        assert_eq!(normalize_package_name("a-_.b"), "a-b");
        assert_eq!(normalize_package_name("click"), "click");
    }
}
