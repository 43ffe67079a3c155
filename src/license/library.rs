use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use glob::Pattern;
use rayon::prelude::*;
use super::{extractor, normalize_package_name, Identify, Library};
use crate::uv_lock::{dependency_closure, UvLockParser, UvPackage};

/// Enumerates the libraries reachable from a set of packages.
pub trait LibrarySource {
    /// Libraries reachable from `packages`, skipping those whose name matches
    /// one of the `ignore` glob patterns.
    fn libraries<C: Identify + Sync>(
        &self,
        classifier: &C,
        ignore: &[String],
        packages: &[String],
    ) -> Result<Vec<Library>>;
}

/// Libraries of a uv project: the dependency graph comes from `uv.lock`,
/// license files from the installed distributions in site-packages.
///
/// Paths left out are discovered when libraries are enumerated, not when
/// the source is built.
#[derive(Debug, Clone, Default)]
pub struct UvLibraries {
    lock_path: Option<PathBuf>,
    site_packages: Option<PathBuf>,
}

/// Where a uv project's lock file and installed distributions live.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectPaths {
    pub lock_path: PathBuf,
    pub site_packages: PathBuf,
}

impl UvLibraries {
    pub fn new(lock_path: Option<PathBuf>, site_packages: Option<PathBuf>) -> Self {
        Self { lock_path, site_packages }
    }

    /// Fill in whatever was not given: the nearest `uv.lock` above the
    /// current directory and the virtualenv next to it.
    pub fn resolve(&self) -> Result<ProjectPaths> {
        let lock_path = match &self.lock_path {
            Some(path) => path.clone(),
            None => UvLockParser::find_uv_lock().ok_or_else(|| {
                anyhow::anyhow!(
                    "No uv.lock found in current directory or parent directories.\n\
                     Please run 'uv lock' or pass --lock."
                )
            })?,
        };

        let site_packages = match &self.site_packages {
            Some(path) => path.clone(),
            None => {
                let project_dir = lock_path.parent().unwrap_or_else(|| Path::new("."));
                find_site_packages_path(project_dir)?
            }
        };

        log::debug!("Using {} and {}", lock_path.display(), site_packages.display());
        Ok(ProjectPaths { lock_path, site_packages })
    }
}

impl ProjectPaths {
    fn locate<C: Identify>(&self, package: &UvPackage, classifier: &C) -> Result<Library> {
        let dist_info_path = extractor::find_dist_info(&self.site_packages, &package.name)
            .with_context(|| {
                format!(
                    "Package '{}' is locked in {} but not installed; run 'uv sync'",
                    package.name,
                    self.lock_path.display()
                )
            })?;
        let info = extractor::read_dist_info(&dist_info_path)?;

        if let (Some(installed), Some(locked)) = (&info.version, &package.version) {
            if installed != locked {
                log::warn!(
                    "{} is locked at {} but {} is installed",
                    package.name,
                    locked,
                    installed
                );
            }
        }

        let license_path = extractor::find_license_file(&info, classifier)?;
        match &license_path {
            Some(path) => log::debug!("{}: license file {}", package.name, path.display()),
            None => log::warn!("{}: no license file found in {}", package.name, info.path.display()),
        }

        Ok(Library {
            name: package.name.clone(),
            version: package.version.clone().or(info.version),
            license_path,
        })
    }
}

impl LibrarySource for UvLibraries {
    fn libraries<C: Identify + Sync>(
        &self,
        classifier: &C,
        ignore: &[String],
        packages: &[String],
    ) -> Result<Vec<Library>> {
        let ignore = compile_ignore_patterns(ignore)?;
        let paths = self.resolve()?;
        let lock_file = UvLockParser::parse_uv_lock(&paths.lock_path)?;

        let reachable = dependency_closure(&lock_file, packages)
            .with_context(|| format!("Failed to resolve packages in {}", paths.lock_path.display()))?;

        // Ignored packages drop out, their dependencies were still walked.
        let selected: Vec<&UvPackage> = reachable
            .into_iter()
            .filter(|package| !package.is_virtual())
            .filter(|package| {
                let ignored = is_ignored(&ignore, &package.name);
                if ignored {
                    log::debug!("Ignoring {}", package.name);
                }
                !ignored
            })
            .collect();

        log::info!(
            "{} libraries reachable from {}",
            selected.len(),
            packages.join(", ")
        );

        let located: Vec<Result<Library>> = selected
            .par_iter()
            .map(|package| paths.locate(package, classifier))
            .collect();

        // First failure in traversal order, whichever thread finished first.
        located.into_iter().collect()
    }
}

fn compile_ignore_patterns(ignore: &[String]) -> Result<Vec<Pattern>> {
    ignore
        .iter()
        .map(|raw| {
            Pattern::new(raw).with_context(|| format!("Invalid ignore pattern '{}'", raw))
        })
        .collect()
}

fn is_ignored(patterns: &[Pattern], package_name: &str) -> bool {
    let normalized = normalize_package_name(package_name);
    patterns
        .iter()
        .any(|pattern| pattern.matches(package_name) || pattern.matches(&normalized))
}

/// Site-packages of the uv virtualenv in `project_dir`
pub fn find_site_packages_path(project_dir: &Path) -> Result<PathBuf> {
    let venv_path = project_dir.join(".venv");

    if venv_path.exists() {
        // Unix-like systems
        let lib_path = venv_path.join("lib");
        if lib_path.exists() {
            for entry in fs::read_dir(&lib_path)? {
                let entry = entry?;
                if entry.file_name().to_string_lossy().starts_with("python") {
                    let site_packages = entry.path().join("site-packages");
                    if site_packages.exists() {
                        return Ok(site_packages);
                    }
                }
            }
        }

        // Windows
        let lib_path = venv_path.join("Lib").join("site-packages");
        if lib_path.exists() {
            return Ok(lib_path);
        }
    }

    anyhow::bail!(
        "Could not find site-packages under {}. Run 'uv sync' or pass --site-packages",
        venv_path.display()
    )
}
