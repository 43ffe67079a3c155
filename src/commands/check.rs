use anyhow::Result;
use py_license_check::config::{load_config, Overrides};
use py_license_check::license::UvLibraries;
use py_license_check::policy::check_packages;

pub fn handle_check(packages: Vec<String>, exclude_restricted: bool, overrides: Overrides) -> Result<()> {
    // pyproject.toml first, command line on top
    let config = load_config()?.apply(Overrides {
        exclude_restricted,
        ..overrides
    });
    let options = config.check_options();

    // Lock and venv are looked up during enumeration, after the classifier is built.
    let source = UvLibraries::new(config.lock_file.clone(), config.site_packages.clone());

    let outcome = check_packages(
        |threshold| config.classifier(threshold),
        &source,
        &packages,
        &options,
        &mut std::io::stderr().lock(),
    )?;

    // Disallowed licenses end the process here; callers cannot recover from it.
    if outcome.is_failure() {
        std::process::exit(1);
    }

    Ok(())
}
