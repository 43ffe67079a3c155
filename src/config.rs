use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use crate::license::{Classifier, CustomLicense, DEFAULT_CONFIDENCE_THRESHOLD};
use crate::policy::CheckOptions;

/// Name of the `[tool.*]` table read from pyproject.toml.
pub const TOOL_SECTION: &str = "py-license-check";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Minimum confidence for a license text match (0.0 to 1.0)
    pub confidence_threshold: Option<f64>,

    /// Glob patterns of package names left out of the check
    pub ignore: Option<Vec<String>>,

    /// Fail on Restricted licenses as well as Forbidden ones
    pub exclude_restricted: Option<bool>,

    /// Path to uv.lock (default: searched upward from the current directory)
    pub lock_file: Option<PathBuf>,

    /// Path to site-packages (default: the project's .venv)
    pub site_packages: Option<PathBuf>,

    /// Extra licenses known to the classifier
    #[serde(default)]
    pub licenses: Vec<CustomLicense>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            confidence_threshold: Some(DEFAULT_CONFIDENCE_THRESHOLD),
            ignore: Some(Vec::new()),
            exclude_restricted: Some(false),
            lock_file: None,
            site_packages: None,
            licenses: Vec::new(),
        }
    }
}

/// Values given on the command line; they win over pyproject.toml.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub confidence_threshold: Option<f64>,
    /// Appended to the configured patterns.
    pub ignore: Vec<String>,
    pub exclude_restricted: bool,
    pub lock_file: Option<PathBuf>,
    pub site_packages: Option<PathBuf>,
}

impl Config {
    /// Merge command-line values into the configuration
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if overrides.confidence_threshold.is_some() {
            self.confidence_threshold = overrides.confidence_threshold;
        }
        if !overrides.ignore.is_empty() {
            self.ignore
                .get_or_insert_with(Vec::new)
                .extend(overrides.ignore);
        }
        if overrides.exclude_restricted {
            self.exclude_restricted = Some(true);
        }
        if overrides.lock_file.is_some() {
            self.lock_file = overrides.lock_file;
        }
        if overrides.site_packages.is_some() {
            self.site_packages = overrides.site_packages;
        }
        self
    }

    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            confidence_threshold: self.confidence_threshold.unwrap_or(DEFAULT_CONFIDENCE_THRESHOLD),
            ignore: self.ignore.clone().unwrap_or_default(),
            exclude_restricted: self.exclude_restricted.unwrap_or(false),
        }
    }

    /// Build the classifier this configuration describes
    pub fn classifier(&self, threshold: f64) -> Result<Classifier> {
        Classifier::with_custom(threshold, &self.licenses)
    }

    fn resolve_paths(&mut self, base: &Path) {
        for path in [&mut self.lock_file, &mut self.site_packages].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Load configuration from pyproject.toml in the current directory
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    load_config_from(&current_dir)
}

/// Load configuration from pyproject.toml in `dir`
pub fn load_config_from(dir: &Path) -> Result<Config> {
    let pyproject_path = dir.join("pyproject.toml");

    if !pyproject_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&pyproject_path)
        .with_context(|| format!("Failed to read pyproject.toml: {}", pyproject_path.display()))?;

    let pyproject: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse pyproject.toml: {}", pyproject_path.display()))?;

    let Some(section) = pyproject.get("tool").and_then(|tool| tool.get(TOOL_SECTION)) else {
        return Ok(Config::default());
    };

    let mut config: Config = section
        .clone()
        .try_into()
        .with_context(|| format!("Failed to parse [tool.{}] section", TOOL_SECTION))?;
    config.resolve_paths(dir);

    log::debug!("Loaded configuration from {}", pyproject_path.display());
    Ok(config)
}
