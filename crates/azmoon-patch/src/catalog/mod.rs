//! Replacement cutoff tables and Persian analysis templates, one module per
//! questionnaire. The content is hand-authored and hand-verified; the bulk
//! updater replaces the target file's `cutoffs` and `analysis_templates`
//! wholesale with what these sets return.

pub mod bai;
pub mod ces_d;
pub mod dass21;
pub mod eat26;
pub mod enrich;
pub mod ies_r;
pub mod lsas;
pub mod mbi;
pub mod moci;
pub mod pcl5;
pub mod scl90r;
pub mod stai;
pub mod whoqol_bref;

use azmoon_core::models::{AnalysisTemplate, TestCutoff};

/// A full replacement of one questionnaire's `cutoffs` and
/// `analysis_templates`.
pub trait TemplateSet: Send + Sync {
    /// Slug of the questionnaire this set replaces content for.
    fn slug(&self) -> &str;

    fn cutoffs(&self) -> Vec<TestCutoff>;

    fn analysis_templates(&self) -> Vec<AnalysisTemplate>;
}

/// All replacement sets, in processing order.
pub fn all_template_sets() -> Vec<Box<dyn TemplateSet>> {
    vec![
        Box::new(bai::Bai),
        Box::new(stai::Stai),
        Box::new(dass21::Dass21),
        Box::new(ces_d::CesD),
        Box::new(pcl5::Pcl5),
        Box::new(ies_r::IesR),
        Box::new(moci::Moci),
        Box::new(lsas::Lsas),
        Box::new(eat26::Eat26),
        Box::new(whoqol_bref::WhoqolBref),
        Box::new(mbi::Mbi),
        Box::new(enrich::Enrich),
        Box::new(scl90r::Scl90R),
    ]
}

/// Look up a replacement set by slug.
pub fn get_template_set(slug: &str) -> Option<Box<dyn TemplateSet>> {
    all_template_sets().into_iter().find(|s| s.slug() == slug)
}

fn cutoff(scale_key: &str, min: f64, max: f64, label: &str, label_fa: &str) -> TestCutoff {
    TestCutoff {
        scale_key: scale_key.to_string(),
        min,
        max,
        label: label.to_string(),
        label_fa: label_fa.to_string(),
    }
}

fn template(
    scale_key: &str,
    level_label: &str,
    title: &str,
    summary: &str,
    details: &str,
    recommendations: &str,
    disclaimer: &str,
) -> AnalysisTemplate {
    AnalysisTemplate {
        level_label: level_label.to_string(),
        scale_key: scale_key.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        details: details.to_string(),
        recommendations: recommendations.to_string(),
        disclaimer: disclaimer.to_string(),
    }
}
