use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const MIT: &str = r#"MIT License

Copyright (c) 2024 The Authors

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
"#;

pub const AGPL: &str = r#"                    GNU AFFERO GENERAL PUBLIC LICENSE
                       Version 3, 19 November 2007

                            Preamble

  The GNU Affero General Public License is a free, copyleft license for
software and other kinds of works, specifically designed to ensure
cooperation with the community in the case of network server software.
"#;

pub const LGPL: &str = r#"                  GNU LESSER GENERAL PUBLIC LICENSE
                       Version 2.1, February 1999

[This is the first released version of the Lesser GPL.  It also counts
 as the successor of the GNU Library Public License, version 2, hence
 the version number 2.1.]
"#;

/// A uv project on disk: pyproject.toml, uv.lock and an installed .venv.
pub struct TestProject {
    pub dir: TempDir,
    pub binary_path: String,
    packages: Vec<(String, String, Vec<String>)>,
}

impl TestProject {
    pub fn new() -> Self {
        let project = Self::empty();
        fs::create_dir_all(project.site_packages()).unwrap();
        fs::write(
            project.path().join("pyproject.toml"),
            "[project]\nname = \"app\"\nversion = \"0.1.0\"\n",
        )
        .unwrap();
        project
    }

    /// A bare directory: no pyproject.toml, no uv.lock, no .venv.
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let binary_path = env!("CARGO_BIN_EXE_py-license-check").to_string();
        Self { dir, binary_path, packages: Vec::new() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn site_packages(&self) -> PathBuf {
        self.path().join(".venv/lib/python3.12/site-packages")
    }

    /// Lock and install `name==version` with the given license text.
    pub fn add_package(&mut self, name: &str, version: &str, deps: &[&str], license: &str) -> &mut Self {
        let dist_info = self
            .site_packages()
            .join(format!("{}-{}.dist-info", name.replace('-', "_"), version));
        fs::create_dir_all(&dist_info).unwrap();
        fs::write(
            dist_info.join("METADATA"),
            format!("Metadata-Version: 2.1\nName: {}\nVersion: {}\n", name, version),
        )
        .unwrap();
        fs::write(dist_info.join("LICENSE"), license).unwrap();

        self.packages.push((
            name.to_string(),
            version.to_string(),
            deps.iter().map(|dep| dep.to_string()).collect(),
        ));
        self.write_lock();
        self
    }

    pub fn append_pyproject(&self, content: &str) {
        let path = self.path().join("pyproject.toml");
        let mut existing = fs::read_to_string(&path).unwrap();
        existing.push_str(content);
        fs::write(path, existing).unwrap();
    }

    fn write_lock(&self) {
        let mut lock = String::from("version = 1\nrequires-python = \">=3.12\"\n");
        for (name, version, deps) in &self.packages {
            lock.push_str(&format!(
                "\n[[package]]\nname = \"{}\"\nversion = \"{}\"\nsource = {{ registry = \"https://pypi.org/simple\" }}\n",
                name, version
            ));
            if !deps.is_empty() {
                let deps: Vec<String> = deps.iter().map(|dep| format!("{{ name = \"{}\" }}", dep)).collect();
                lock.push_str(&format!("dependencies = [{}]\n", deps.join(", ")));
            }
        }
        fs::write(self.path().join("uv.lock"), lock).unwrap();
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run py-license-check")
    }
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
