use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use indexmap::IndexMap;
use crate::license::normalize_package_name;

#[derive(Debug, Clone, Deserialize)]
pub struct UvLockFile {
    pub version: u32,
    pub revision: Option<u32>,
    #[serde(rename = "requires-python")]
    pub requires_python: Option<String>,
    #[serde(rename = "package", default)]
    pub packages: Vec<UvPackage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UvPackage {
    pub name: String,
    pub version: Option<String>,
    pub source: Option<UvSource>,
    #[serde(default)]
    pub dependencies: Vec<UvDependency>,
    #[serde(rename = "optional-dependencies", default)]
    pub optional_dependencies: BTreeMap<String, Vec<UvDependency>>,
}

impl UvPackage {
    /// The project itself in a uv workspace; never installed as a distribution.
    pub fn is_virtual(&self) -> bool {
        self.source
            .as_ref()
            .map_or(false, |source| source.virtual_path.is_some())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UvSource {
    pub registry: Option<String>,
    pub git: Option<String>,
    pub path: Option<String>,
    pub editable: Option<String>,
    #[serde(rename = "virtual")]
    pub virtual_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UvDependency {
    Simple(String),
    Complex {
        name: String,
        version: Option<String>,
        marker: Option<String>,
        #[serde(default)]
        extra: Vec<String>,
    },
}

impl UvDependency {
    pub fn name(&self) -> &str {
        match self {
            UvDependency::Simple(name) => name,
            UvDependency::Complex { name, .. } => name,
        }
    }

    fn version(&self) -> Option<&str> {
        match self {
            UvDependency::Simple(_) => None,
            UvDependency::Complex { version, .. } => version.as_deref(),
        }
    }

    fn extras(&self) -> &[String] {
        match self {
            UvDependency::Simple(_) => &[],
            UvDependency::Complex { extra, .. } => extra,
        }
    }
}

pub struct UvLockParser;

impl UvLockParser {
    /// Parse uv.lock file and return structured data
    pub fn parse_uv_lock<P: AsRef<Path>>(path: P) -> Result<UvLockFile> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(anyhow::anyhow!("uv.lock file not found: {}", path_ref.display()));
        }

        let content = std::fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read uv.lock file: {}", path_ref.display()))?;

        if content.trim().is_empty() {
            return Err(anyhow::anyhow!("uv.lock file is empty: {}", path_ref.display()));
        }

        let lock_file: UvLockFile = toml::from_str(&content)
            .with_context(|| {
                format!("Failed to parse uv.lock file as TOML: {}\nThis might indicate a corrupted or incompatible uv.lock file.", path_ref.display())
            })?;

        if lock_file.packages.is_empty() {
            log::warn!("uv.lock file contains no packages: {}", path_ref.display());
        }

        Ok(lock_file)
    }

    /// Find uv.lock file in current directory or parent directories
    pub fn find_uv_lock() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::find_uv_lock_from(&current)
    }

    /// Find uv.lock file in `start` or its ancestors
    pub fn find_uv_lock_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let uv_lock_path = current.join("uv.lock");
            if uv_lock_path.exists() {
                match std::fs::metadata(&uv_lock_path) {
                    Ok(metadata) if metadata.len() > 0 => {
                        log::info!("Found uv.lock at {}", uv_lock_path.display());
                        return Some(uv_lock_path);
                    }
                    Ok(_) => log::warn!("Found empty uv.lock file at {}, continuing search...", uv_lock_path.display()),
                    Err(e) => log::warn!("Cannot read metadata of {}: {}, continuing search...", uv_lock_path.display(), e),
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }
}

type PackageKey = (String, String);

fn package_key(package: &UvPackage) -> PackageKey {
    (
        normalize_package_name(&package.name),
        package.version.clone().unwrap_or_default(),
    )
}

/// Breadth-first walk over the lock's dependency graph.
struct DependencyWalk<'a> {
    by_name: HashMap<String, Vec<&'a UvPackage>>,
    reached: IndexMap<PackageKey, &'a UvPackage>,
    expanded: HashSet<(PackageKey, Option<String>)>,
    queue: VecDeque<(&'a UvPackage, Option<String>)>,
}

impl<'a> DependencyWalk<'a> {
    fn new(lock_file: &'a UvLockFile) -> Self {
        let mut by_name: HashMap<String, Vec<&UvPackage>> = HashMap::new();
        for package in &lock_file.packages {
            by_name
                .entry(normalize_package_name(&package.name))
                .or_default()
                .push(package);
        }

        Self {
            by_name,
            reached: IndexMap::new(),
            expanded: HashSet::new(),
            queue: VecDeque::new(),
        }
    }

    fn enqueue(&mut self, package: &'a UvPackage, extras: &[String]) {
        let key = package_key(package);
        self.reached.entry(key.clone()).or_insert(package);

        if self.expanded.insert((key.clone(), None)) {
            self.queue.push_back((package, None));
        }
        for extra in extras {
            if self.expanded.insert((key.clone(), Some(extra.clone()))) {
                self.queue.push_back((package, Some(extra.clone())));
            }
        }
    }

    fn follow(&mut self, from: &UvPackage, dependency: &UvDependency) {
        let Some(candidates) = self.by_name.get(&normalize_package_name(dependency.name())) else {
            log::warn!(
                "Dependency '{}' of '{}' is missing from uv.lock, skipping",
                dependency.name(),
                from.name
            );
            return;
        };

        let targets: Vec<&'a UvPackage> = candidates
            .iter()
            .copied()
            .filter(|candidate| match dependency.version() {
                Some(version) => candidate.version.as_deref() == Some(version),
                None => true,
            })
            .collect();

        for target in targets {
            self.enqueue(target, dependency.extras());
        }
    }

    fn run(mut self) -> Vec<&'a UvPackage> {
        while let Some((package, extra)) = self.queue.pop_front() {
            let dependencies = match &extra {
                None => package.dependencies.as_slice(),
                Some(extra) => package
                    .optional_dependencies
                    .get(extra)
                    .map(Vec::as_slice)
                    .unwrap_or_default(),
            };
            for dependency in dependencies {
                self.follow(package, dependency);
            }
        }

        self.reached.into_values().collect()
    }
}

/// Every package reachable from `roots`, roots first, in breadth-first order.
///
/// Environment markers are not evaluated: platform-specific dependencies are
/// always included.
pub fn dependency_closure<'a>(lock_file: &'a UvLockFile, roots: &[String]) -> Result<Vec<&'a UvPackage>> {
    let mut walk = DependencyWalk::new(lock_file);

    for root in roots {
        let candidates = walk
            .by_name
            .get(&normalize_package_name(root))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Package '{}' not found in uv.lock", root))?;
        for package in candidates {
            walk.enqueue(package, &[]);
        }
    }

    Ok(walk.run())
}
