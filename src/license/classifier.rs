use std::collections::HashSet;
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use super::corpus::BUILTIN;
use super::{Identify, LicenseType};

/// Confidence a match needs unless configured otherwise.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.9;

/// User-supplied corpus entry, read from `[[tool.py-license-check.licenses]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomLicense {
    pub id: String,
    pub category: LicenseType,
    pub text: String,
}

/// Best corpus entry for a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: String,
    pub category: LicenseType,
    pub confidence: f64,
}

#[derive(Debug)]
struct Template {
    id: String,
    category: LicenseType,
    trigrams: HashSet<String>,
}

impl Template {
    fn build<'a>(
        id: &str,
        category: LicenseType,
        passages: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self> {
        let id = id.trim();
        if id.is_empty() {
            anyhow::bail!("License entry with an empty id in classification corpus");
        }

        let mut trigrams = HashSet::new();
        for passage in passages {
            trigrams.extend(word_trigrams(passage));
        }

        if trigrams.is_empty() {
            anyhow::bail!(
                "License '{}' has no usable text in classification corpus (need at least three words)",
                id
            );
        }

        Ok(Self {
            id: id.to_string(),
            category,
            trigrams,
        })
    }
}

/// Text classifier matching license files against a corpus of known licenses.
#[derive(Debug)]
pub struct Classifier {
    threshold: f64,
    templates: Vec<Template>,
}

impl Classifier {
    /// Build a classifier over the built-in corpus.
    pub fn new(threshold: f64) -> Result<Self> {
        Self::with_custom(threshold, &[])
    }

    /// Build a classifier over the built-in corpus plus `custom` entries.
    pub fn with_custom(threshold: f64, custom: &[CustomLicense]) -> Result<Self> {
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            anyhow::bail!(
                "Confidence threshold must be between 0.0 and 1.0, got {}",
                threshold
            );
        }

        let mut templates = Vec::with_capacity(BUILTIN.len() + custom.len());
        for entry in BUILTIN {
            templates.push(Template::build(entry.id, entry.category, entry.passages.iter().copied())?);
        }
        for license in custom {
            let template = Template::build(&license.id, license.category, [license.text.as_str()])
                .context("Invalid custom license")?;
            templates.push(template);
        }

        let mut seen = HashSet::new();
        for template in &templates {
            if !seen.insert(template.id.as_str()) {
                anyhow::bail!("Duplicate license id '{}' in classification corpus", template.id);
            }
        }

        log::debug!(
            "Classifier ready: {} licenses, confidence threshold {}",
            templates.len(),
            threshold
        );

        Ok(Self { threshold, templates })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Ids of every license the classifier knows.
    pub fn license_ids(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.id.as_str())
    }

    /// Highest scoring corpus entry regardless of the threshold.
    pub fn best_match(&self, text: &str) -> Option<Match> {
        let candidate: HashSet<String> = word_trigrams(text).collect();
        if candidate.is_empty() {
            return None;
        }

        let mut best: Option<(&Template, f64)> = None;
        for template in &self.templates {
            let hits = template
                .trigrams
                .iter()
                .filter(|trigram| candidate.contains(*trigram))
                .count();
            let confidence = hits as f64 / template.trigrams.len() as f64;

            // Equal scores go to the longer license, which contains the shorter one.
            let better = match best {
                None => true,
                Some((current, score)) => {
                    confidence > score
                        || (confidence == score && template.trigrams.len() > current.trigrams.len())
                }
            };
            if better {
                best = Some((template, confidence));
            }
        }

        best.map(|(template, confidence)| Match {
            id: template.id.clone(),
            category: template.category,
            confidence,
        })
    }

    /// Best match if it reaches the confidence threshold.
    pub fn classify_text(&self, text: &str) -> Option<Match> {
        self.best_match(text)
            .filter(|m| m.confidence >= self.threshold)
    }
}

impl Identify for Classifier {
    fn identify(&self, license_path: &Path) -> Result<(String, LicenseType)> {
        let text = fs::read_to_string(license_path)
            .with_context(|| format!("Failed to read license file: {}", license_path.display()))?;

        match self.best_match(&text) {
            Some(m) if m.confidence >= self.threshold => {
                log::debug!(
                    "{} identified as {} ({:.2} confidence)",
                    license_path.display(),
                    m.id,
                    m.confidence
                );
                Ok((m.id, m.category))
            }
            Some(m) => anyhow::bail!(
                "Unknown license in {} (closest: {} at {:.2} confidence, threshold {:.2})",
                license_path.display(),
                m.id,
                m.confidence,
                self.threshold
            ),
            None => anyhow::bail!("Unknown license in {} (no license text)", license_path.display()),
        }
    }

    fn detects_license(&self, text: &str) -> bool {
        self.classify_text(text).is_some()
    }
}

/// Lowercased alphanumeric words of `text`, joined three at a time.
fn word_trigrams(text: &str) -> impl Iterator<Item = String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let words: Vec<String> = normalized.split_whitespace().map(str::to_string).collect();

    let count = words.len().saturating_sub(2);
    (0..count).map(move |i| words[i..i + 3].join(" "))
}
