use anyhow::Result;
use py_license_check::config::{load_config, Overrides};

pub fn handle_config(show: bool, validate: bool, quiet: bool, overrides: Overrides) -> Result<()> {
    if !show && !validate {
        if !quiet {
            eprintln!("Use --show or --validate");
        }
        std::process::exit(1);
    }

    let config = match load_config() {
        Ok(config) => config.apply(overrides),
        Err(e) => {
            if !quiet {
                eprintln!("❌ Configuration validation failed: {:#}", e);
            }
            std::process::exit(1);
        }
    };

    if show && !quiet {
        println!("{}", serde_json::to_string_pretty(&config)?);
    }

    if validate {
        let threshold = config.check_options().confidence_threshold;
        match config.classifier(threshold) {
            Ok(classifier) => {
                if !quiet {
                    println!(
                        "✅ Configuration is valid ({} known licenses)",
                        classifier.license_ids().count()
                    );
                }
            }
            Err(e) => {
                if !quiet {
                    eprintln!("❌ Configuration validation failed: {:#}", e);
                }
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
