use std::io::Write;
use anyhow::{Context, Result};
use serde::Serialize;
use crate::license::{Identify, LibrarySource, LicenseType};

/// Inputs of one check pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOptions {
    pub confidence_threshold: f64,
    pub ignore: Vec<String>,
    /// Restricted licenses fail the check too.
    pub exclude_restricted: bool,
}

/// A library whose license the policy does not allow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub library: String,
    pub license: String,
    pub license_type: LicenseType,
}

/// Result of a completed pass. Disallowed licenses are an outcome, not an error.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub violations: Vec<Violation>,
}

impl CheckOutcome {
    /// The caller must exit with status 1.
    pub fn is_failure(&self) -> bool {
        !self.violations.is_empty()
    }
}

/// Whether a license of `license_type` fails the check.
pub fn is_disallowed(license_type: LicenseType, exclude_restricted: bool) -> bool {
    match license_type {
        LicenseType::Forbidden => true,
        LicenseType::Restricted => exclude_restricted,
        _ => false,
    }
}

/// Classify every library reachable from `packages` and report disallowed ones.
///
/// Building the classifier, enumerating libraries and identifying any single
/// license abort the pass on the first error. Each disallowed license gets one
/// `<Forbidden|Restricted> license type <name> for library <lib>` line on
/// `diagnostics`.
pub fn check_packages<C, F, S, W>(
    new_classifier: F,
    source: &S,
    packages: &[String],
    options: &CheckOptions,
    diagnostics: &mut W,
) -> Result<CheckOutcome>
where
    C: Identify + Sync,
    F: FnOnce(f64) -> Result<C>,
    S: LibrarySource,
    W: Write,
{
    if packages.is_empty() {
        anyhow::bail!("At least one package is required");
    }

    let classifier = new_classifier(options.confidence_threshold)?;
    let libs = source.libraries(&classifier, &options.ignore, packages)?;

    let mut outcome = CheckOutcome::default();
    for lib in &libs {
        let license_path = lib
            .license_path
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("No license file found for library {}", lib))?;
        let (license_name, license_type) = classifier.identify(license_path)?;
        log::debug!("{}: {} ({})", lib, license_name, license_type);

        if is_disallowed(license_type, options.exclude_restricted) {
            writeln!(
                diagnostics,
                "{} license type {} for library {}",
                license_type, license_name, lib
            )
            .context("Failed to write diagnostics")?;
            outcome.violations.push(Violation {
                library: lib.to_string(),
                license: license_name,
                license_type,
            });
        }
    }

    log::info!(
        "Checked {} libraries, {} disallowed",
        libs.len(),
        outcome.violations.len()
    );

    Ok(outcome)
}
