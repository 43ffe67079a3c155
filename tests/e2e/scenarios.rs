use super::helpers::{stderr, stdout, TestProject, AGPL, LGPL, MIT};

#[test]
fn test_permissive_dependencies_pass_silently() {
    let mut project = TestProject::new();
    project
        .add_package("pkg-b", "1.0.0", &["helper"], MIT)
        .add_package("helper", "2.1.0", &[], MIT);

    let output = project.run(&["check", "pkg-b"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stderr(&output), "");
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_forbidden_license_exits_one() {
    let mut project = TestProject::new();
    project.add_package("pkg-a", "1.0.0", &[], AGPL);

    let output = project.run(&["check", "pkg-a"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "Forbidden license type AGPL-3.0 for library pkg-a==1.0.0\n"
    );
}

#[test]
fn test_forbidden_transitive_dependency() {
    let mut project = TestProject::new();
    project
        .add_package("app-core", "0.3.0", &["netlib"], MIT)
        .add_package("netlib", "4.2.0", &[], AGPL);

    let output = project.run(&["check", "app-core"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "Forbidden license type AGPL-3.0 for library netlib==4.2.0\n"
    );
}

#[test]
fn test_restricted_license_needs_flag() {
    let mut project = TestProject::new();
    project.add_package("pkg-c", "1.0.0", &[], LGPL);

    let output = project.run(&["check", "pkg-c"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stderr(&output), "");

    let output = project.run(&["check", "--exclude-restricted", "pkg-c"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "Restricted license type LGPL-2.1 for library pkg-c==1.0.0\n"
    );
}

#[test]
fn test_exclude_restricted_from_pyproject() {
    let mut project = TestProject::new();
    project.add_package("pkg-c", "1.0.0", &[], LGPL);
    project.append_pyproject("\n[tool.py-license-check]\nexclude_restricted = true\n");

    let output = project.run(&["check", "pkg-c"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Restricted license type LGPL-2.1"));
}

#[test]
fn test_ignore_pattern_skips_library() {
    let mut project = TestProject::new();
    project
        .add_package("app-core", "0.3.0", &["netlib"], MIT)
        .add_package("netlib", "4.2.0", &[], AGPL);

    let output = project.run(&["check", "--ignore", "net*", "app-core"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_unknown_package_is_an_error() {
    let mut project = TestProject::new();
    project.add_package("pkg-b", "1.0.0", &[], MIT);

    let output = project.run(&["check", "does-not-exist"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("'does-not-exist' not found"));
    assert!(!stderr(&output).contains("license type"));
}

#[test]
fn test_unrecognised_license_is_an_error() {
    let mut project = TestProject::new();
    project.add_package("pkg-x", "1.0.0", &[], "All rights reserved. Ask us first.");

    let output = project.run(&["check", "pkg-x"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown license"));
}

#[test]
fn test_check_requires_a_package() {
    let project = TestProject::new();

    let output = project.run(&["check"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_threshold_is_an_error() {
    let mut project = TestProject::new();
    project.add_package("pkg-b", "1.0.0", &[], MIT);

    let output = project.run(&["--confidence-threshold", "1.5", "check", "pkg-b"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Confidence threshold"));
}

#[test]
fn test_invalid_threshold_reported_before_project_lookup() {
    let project = TestProject::empty();

    let output = project.run(&["--confidence-threshold", "1.5", "check", "pkg"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr(&output);
    assert!(stderr.contains("Confidence threshold"), "{}", stderr);
    assert!(!stderr.contains("uv.lock"), "{}", stderr);
}

#[test]
fn test_config_show_and_validate() {
    let project = TestProject::new();
    project.append_pyproject(
        r#"
[tool.py-license-check]
confidence_threshold = 0.85
ignore = ["internal-*"]
"#,
    );

    let show = project.run(&["config", "--show"]);
    assert!(show.status.success());
    assert!(stdout(&show).contains("\"confidence_threshold\": 0.85"));
    assert!(stdout(&show).contains("internal-*"));

    let validate = project.run(&["config", "--validate"]);
    assert!(validate.status.success());
    assert!(stdout(&validate).contains("Configuration is valid"));
}

#[test]
fn test_config_validate_rejects_bad_custom_license() {
    let project = TestProject::new();
    project.append_pyproject(
        r#"
[[tool.py-license-check.licenses]]
id = "MIT"
category = "Forbidden"
text = "a duplicate of a built-in license id"
"#,
    );

    let output = project.run(&["config", "--validate"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Duplicate license id"));
}
