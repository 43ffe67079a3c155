use anyhow::{Context, Result};
use glob::MatchOptions;
use std::fs;
use std::path::{Path, PathBuf};
use super::{normalize_package_name, Identify};

/// File names accepted as a license on sight.
const LICENSE_FILE_PATTERNS: &[&str] = &["LICEN[CS]E*", "COPYING*"];

/// File names accepted only when their text classifies as a license.
const FALLBACK_FILE_PATTERNS: &[&str] = &["README*", "NOTICE*"];

/// Installed metadata of one distribution.
#[derive(Debug, Clone)]
pub struct DistInfo {
    pub path: PathBuf,
    pub name: String,
    pub version: Option<String>,
    /// `License-File:` entries, relative to the metadata directory.
    pub license_files: Vec<String>,
}

/// Locate the `.dist-info` (or legacy `.egg-info`) directory of `package_name`
pub fn find_dist_info(site_packages_path: &Path, package_name: &str) -> Result<PathBuf> {
    let wanted = normalize_package_name(package_name);

    for suffix in [".dist-info", ".egg-info"] {
        let entries = fs::read_dir(site_packages_path)
            .with_context(|| format!("Failed to read site-packages: {}", site_packages_path.display()))?;

        for entry in entries {
            let entry = entry?;
            let file_name = entry.file_name();
            let name_str = file_name.to_string_lossy();

            let Some(name_version) = name_str.strip_suffix(suffix) else {
                continue;
            };
            let (name, _) = split_name_version(name_version);
            if normalize_package_name(name) == wanted {
                return Ok(entry.path());
            }
        }
    }

    anyhow::bail!(
        "Package '{}' not found in site-packages: {}",
        package_name,
        site_packages_path.display()
    )
}

/// Read name, version and declared license files from a metadata directory
pub fn read_dist_info(dist_info_path: &Path) -> Result<DistInfo> {
    let metadata_path = ["METADATA", "PKG-INFO"]
        .iter()
        .map(|file| dist_info_path.join(file))
        .find(|path| path.exists());

    let file_name = dist_info_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid metadata directory name: {}", dist_info_path.display()))?;
    let name_version = file_name
        .strip_suffix(".dist-info")
        .or_else(|| file_name.strip_suffix(".egg-info"))
        .unwrap_or(file_name);
    let (dir_name, dir_version) = split_name_version(name_version);

    let mut info = DistInfo {
        path: dist_info_path.to_path_buf(),
        name: dir_name.to_string(),
        version: dir_version.map(str::to_string),
        license_files: Vec::new(),
    };

    if let Some(metadata_path) = metadata_path {
        let content = fs::read_to_string(&metadata_path)
            .with_context(|| format!("Failed to read {}", metadata_path.display()))?;
        apply_metadata_headers(&mut info, &content);
    }

    Ok(info)
}

/// Find the file holding the license of an installed distribution
///
/// Declared `License-File:` entries win, then well-known license file names,
/// then README/NOTICE files the classifier recognises as license text.
pub fn find_license_file<C: Identify>(info: &DistInfo, classifier: &C) -> Result<Option<PathBuf>> {
    let search_dirs = [info.path.clone(), info.path.join("licenses")];

    for declared in &info.license_files {
        for dir in &search_dirs {
            let candidate = dir.join(declared);
            if candidate.is_file() {
                return Ok(Some(candidate));
            }
        }
        log::debug!("Declared license file '{}' missing from {}", declared, info.path.display());
    }

    for pattern in LICENSE_FILE_PATTERNS {
        if let Some(path) = glob_files(&info.path, pattern)?.into_iter().next() {
            return Ok(Some(path));
        }
    }

    for pattern in FALLBACK_FILE_PATTERNS {
        for path in glob_files(&info.path, pattern)? {
            let Ok(text) = fs::read_to_string(&path) else {
                continue;
            };
            if classifier.detects_license(&text) {
                return Ok(Some(path));
            }
        }
    }

    Ok(None)
}

/// Files under `dir`, at any depth, whose name matches `file_pattern`.
fn glob_files(dir: &Path, file_pattern: &str) -> Result<Vec<PathBuf>> {
    let options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };
    let pattern = format!("{}/**/{}", glob::Pattern::escape(&dir.to_string_lossy()), file_pattern);

    let mut files = Vec::new();
    let paths = glob::glob_with(&pattern, options)
        .with_context(|| format!("Invalid license file pattern: {}", pattern))?;
    for path in paths {
        let path = path?;
        if path.is_file() {
            files.push(path);
        }
    }

    // Shallow files first: a top-level LICENSE beats one vendored deeper down.
    files.sort_by_key(|path| path.components().count());
    Ok(files)
}

/// Split `name-version[-pyX.Y]` at the first dash followed by a digit.
///
/// Anything after the version, such as an egg-info Python tag, is dropped.
fn split_name_version(name_version: &str) -> (&str, Option<&str>) {
    let version_start = name_version
        .char_indices()
        .zip(name_version.chars().skip(1))
        .find(|((_, c), next)| *c == '-' && next.is_ascii_digit())
        .map(|((i, _), _)| i);

    match version_start {
        Some(dash) => {
            let rest = &name_version[dash + 1..];
            let version = rest.split('-').next().unwrap_or(rest);
            (&name_version[..dash], Some(version))
        }
        None => (name_version, None),
    }
}

fn apply_metadata_headers(info: &mut DistInfo, content: &str) {
    // Headers end at the first blank line; the long description follows.
    for line in content.lines().take_while(|line| !line.trim().is_empty()) {
        if let Some(value) = line.strip_prefix("Name: ") {
            info.name = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix("Version: ") {
            info.version = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix("License-File: ") {
            if !value.trim().is_empty() {
                info.license_files.push(value.trim().to_string());
            }
        }
    }
}
