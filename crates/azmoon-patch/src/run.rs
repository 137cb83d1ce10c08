use azmoon_storage::TestStore;

use crate::catalog::TemplateSet;
use crate::error::PatchError;
use crate::patch::{Patch, PatchOutcome};
use crate::report::{PatchReport, PatchStatus, UpdateReport, UpdateStatus};

/// Apply corrective patches in order: load, patch, save only when changed.
///
/// A missing questionnaire file is a hard error here — the corrective set
/// targets a fixed list of files that are expected to exist.
pub fn apply_patches(
    store: &TestStore,
    patches: &[Box<dyn Patch>],
) -> Result<Vec<PatchReport>, PatchError> {
    let mut reports = Vec::with_capacity(patches.len());
    for patch in patches {
        let slug = patch.slug();
        let mut def = store.load(slug)?;
        match patch.apply(&mut def) {
            PatchOutcome::Changed { detail } => {
                store.save(slug, &def)?;
                tracing::info!(slug, %detail, "patch applied");
                reports.push(PatchReport {
                    slug: slug.to_string(),
                    summary: patch.summary().to_string(),
                    status: PatchStatus::Applied,
                    detail: Some(detail),
                });
            }
            PatchOutcome::Unchanged => {
                tracing::info!(slug, "already consistent, nothing to write");
                reports.push(PatchReport {
                    slug: slug.to_string(),
                    summary: patch.summary().to_string(),
                    status: PatchStatus::Unchanged,
                    detail: None,
                });
            }
        }
    }
    Ok(reports)
}

/// Replace `cutoffs` and `analysis_templates` wholesale for every set whose
/// file exists. Missing files are reported and skipped; every other field of
/// a processed file is left untouched. Each file is written independently —
/// there is no cross-file transaction.
pub fn apply_template_updates(
    store: &TestStore,
    sets: &[Box<dyn TemplateSet>],
) -> Result<Vec<UpdateReport>, PatchError> {
    let mut reports = Vec::with_capacity(sets.len());
    for set in sets {
        let slug = set.slug();
        if !store.exists(slug) {
            tracing::warn!(slug, "questionnaire file not found, skipping");
            reports.push(UpdateReport {
                slug: slug.to_string(),
                status: UpdateStatus::SkippedMissing,
            });
            continue;
        }
        let mut def = store.load(slug)?;
        def.cutoffs = set.cutoffs();
        def.analysis_templates = set.analysis_templates();
        store.save(slug, &def)?;
        tracing::info!(
            slug,
            cutoffs = def.cutoffs.len(),
            templates = def.analysis_templates.len(),
            "templates replaced"
        );
        reports.push(UpdateReport {
            slug: slug.to_string(),
            status: UpdateStatus::Updated,
        });
    }
    Ok(reports)
}
