//! Consistency checks over a questionnaire document.
//!
//! Issues are data, not errors: `check` never fails, callers decide what a
//! non-empty result means. The maintenance operations deliberately do not
//! validate before writing — replacement content is hand-verified — so these
//! checks live behind a separate read-only command.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

use crate::models::{TestCutoff, TestDefinition};

/// Bands are treated as adjacent when the next one starts within a single
/// scoring unit of the previous one's end. Score domains are integers except
/// SCL-90-R's GSI, which steps in hundredths; both `7 → 8` and `0.99 → 1.0`
/// pass, anything wider is a gap.
const ADJACENCY_TOLERANCE: f64 = 1.0;

/// A single consistency problem found in a questionnaire document.
#[derive(Debug, Clone, PartialEq, Serialize, Error, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationIssue {
    #[error("{referenced_by} references unknown scale key '{scale_key}'")]
    UnknownScaleKey {
        referenced_by: String,
        scale_key: String,
    },

    #[error("cutoff '{label}' on scale '{scale_key}' has min {min} > max {max}")]
    InvertedRange {
        scale_key: String,
        label: String,
        min: f64,
        max: f64,
    },

    #[error("cutoffs '{first_label}' and '{second_label}' overlap on scale '{scale_key}'")]
    OverlappingBands {
        scale_key: String,
        first_label: String,
        second_label: String,
    },

    #[error("gap between cutoffs '{first_label}' and '{second_label}' on scale '{scale_key}'")]
    BandGap {
        scale_key: String,
        first_label: String,
        second_label: String,
    },

    #[error("no analysis template for scale '{scale_key}' level '{level_label}'")]
    MissingTemplate {
        scale_key: String,
        level_label: String,
    },

    #[error("analysis template for scale '{scale_key}' level '{level_label}' matches no cutoff")]
    OrphanTemplate {
        scale_key: String,
        level_label: String,
    },
}

/// Check one questionnaire document for cross-reference and coverage
/// problems.
pub fn check(def: &TestDefinition) -> Vec<ValidationIssue> {
    let scale_keys: BTreeSet<&str> = def.scales.iter().map(|s| s.key.as_str()).collect();
    let mut issues = Vec::new();

    for question in &def.questions {
        if !scale_keys.contains(question.scale_key.as_str()) {
            issues.push(ValidationIssue::UnknownScaleKey {
                referenced_by: format!("question {}", question.order),
                scale_key: question.scale_key.clone(),
            });
        }
    }

    for cutoff in &def.cutoffs {
        if !scale_keys.contains(cutoff.scale_key.as_str()) {
            issues.push(ValidationIssue::UnknownScaleKey {
                referenced_by: format!("cutoff '{}'", cutoff.label),
                scale_key: cutoff.scale_key.clone(),
            });
        }
        if cutoff.min > cutoff.max {
            issues.push(ValidationIssue::InvertedRange {
                scale_key: cutoff.scale_key.clone(),
                label: cutoff.label.clone(),
                min: cutoff.min,
                max: cutoff.max,
            });
        }
    }

    check_band_coverage(&def.cutoffs, &mut issues);
    check_template_coverage(def, &mut issues);

    issues
}

/// Per scale key: sort bands by lower bound, flag overlaps and gaps between
/// consecutive bands.
fn check_band_coverage(cutoffs: &[TestCutoff], issues: &mut Vec<ValidationIssue>) {
    let mut by_key: BTreeMap<&str, Vec<&TestCutoff>> = BTreeMap::new();
    for cutoff in cutoffs {
        by_key.entry(cutoff.scale_key.as_str()).or_default().push(cutoff);
    }

    for (key, mut bands) in by_key {
        bands.sort_by(|a, b| a.min.total_cmp(&b.min));
        for pair in bands.windows(2) {
            let (first, second) = (pair[0], pair[1]);
            if second.min <= first.max {
                issues.push(ValidationIssue::OverlappingBands {
                    scale_key: key.to_string(),
                    first_label: first.label.clone(),
                    second_label: second.label.clone(),
                });
            } else if second.min - first.max > ADJACENCY_TOLERANCE {
                issues.push(ValidationIssue::BandGap {
                    scale_key: key.to_string(),
                    first_label: first.label.clone(),
                    second_label: second.label.clone(),
                });
            }
        }
    }
}

/// Every (scaleKey, label) produced by the cutoffs needs an analysis
/// template, and every template must correspond to some cutoff band.
fn check_template_coverage(def: &TestDefinition, issues: &mut Vec<ValidationIssue>) {
    let bands: BTreeSet<(&str, &str)> = def
        .cutoffs
        .iter()
        .map(|c| (c.scale_key.as_str(), c.label.as_str()))
        .collect();
    let templates: BTreeSet<(&str, &str)> = def
        .analysis_templates
        .iter()
        .map(|t| (t.scale_key.as_str(), t.level_label.as_str()))
        .collect();

    for (scale_key, level_label) in bands.difference(&templates) {
        issues.push(ValidationIssue::MissingTemplate {
            scale_key: scale_key.to_string(),
            level_label: level_label.to_string(),
        });
    }
    for (scale_key, level_label) in templates.difference(&bands) {
        issues.push(ValidationIssue::OrphanTemplate {
            scale_key: scale_key.to_string(),
            level_label: level_label.to_string(),
        });
    }
}
