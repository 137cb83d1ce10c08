use azmoon_core::models::{
    AnalysisType, TestCutoff, TestDefinition, TestQuestion, TestScale,
};
use azmoon_patch::patches::enrich_total_scale::EnrichTotalScale;
use azmoon_patch::patches::mbi_scale_keys::MbiScaleKeys;
use azmoon_patch::patches::whoqol_total_scale::WhoqolTotalScale;
use azmoon_patch::{Patch, PatchOutcome};

fn definition(slug: &str, scales: Vec<TestScale>) -> TestDefinition {
    TestDefinition {
        slug: slug.to_string(),
        name: slug.to_uppercase(),
        name_fa: String::new(),
        category: "General".to_string(),
        category_fa: String::new(),
        description: String::new(),
        description_fa: String::new(),
        analysis_type: AnalysisType::Direct,
        warning: String::new(),
        time_minutes: 10,
        scales,
        questions: Vec::new(),
        cutoffs: Vec::new(),
        analysis_templates: Vec::new(),
        risk_rules: Vec::new(),
        extra: serde_json::Map::new(),
    }
}

fn scale(key: &str) -> TestScale {
    TestScale {
        key: key.to_string(),
        name: key.to_string(),
        name_fa: String::new(),
    }
}

fn question(order: u32, scale_key: &str) -> TestQuestion {
    TestQuestion {
        order,
        text: format!("q{order}"),
        scale_key: scale_key.to_string(),
        risk_item: None,
        reverse: None,
        options: Vec::new(),
        extra: serde_json::Map::new(),
    }
}

fn cutoff(scale_key: &str, min: f64, max: f64, label: &str) -> TestCutoff {
    TestCutoff {
        scale_key: scale_key.to_string(),
        min,
        max,
        label: label.to_string(),
        label_fa: String::new(),
    }
}

#[test]
fn mbi_scales_and_question_keys_are_rewritten() {
    let mut def = definition(
        "mbi",
        vec![scale("exhaustion"), scale("depersonalization"), scale("accomplishment")],
    );
    def.questions = vec![
        question(1, "exhaustion"),
        question(2, "depersonalization"),
        question(3, "accomplishment"),
    ];

    let outcome = MbiScaleKeys.apply(&mut def);

    assert!(matches!(outcome, PatchOutcome::Changed { .. }));
    let keys: Vec<&str> = def.scales.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["emotional_exhaustion", "depersonalization", "personal_accomplishment"]
    );
    assert!(
        def.questions
            .iter()
            .all(|q| q.scale_key != "exhaustion" && q.scale_key != "accomplishment")
    );
    assert_eq!(def.questions[0].scale_key, "emotional_exhaustion");
    assert_eq!(def.questions[2].scale_key, "personal_accomplishment");
}

#[test]
fn mbi_patch_is_idempotent() {
    let mut def = definition("mbi", vec![scale("exhaustion")]);
    def.questions = vec![question(1, "exhaustion")];

    assert!(matches!(MbiScaleKeys.apply(&mut def), PatchOutcome::Changed { .. }));
    assert_eq!(MbiScaleKeys.apply(&mut def), PatchOutcome::Unchanged);
}

#[test]
fn enrich_total_scale_is_appended_once() {
    let mut def = definition("enrich", vec![scale("communication")]);

    assert!(matches!(EnrichTotalScale.apply(&mut def), PatchOutcome::Changed { .. }));
    assert_eq!(EnrichTotalScale.apply(&mut def), PatchOutcome::Unchanged);

    let totals: Vec<_> = def.scales.iter().filter(|s| s.key == "total").collect();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].name, "Total");
    assert_eq!(totals[0].name_fa, "نمره کل");
}

#[test]
fn whoqol_total_scale_requires_a_dangling_cutoff_reference() {
    // Cutoffs reference `total`, scales do not define it: append.
    let mut def = definition("whoqol-bref", vec![scale("physical")]);
    def.cutoffs = vec![cutoff("total", 0.0, 40.0, "Poor")];
    assert!(matches!(WhoqolTotalScale.apply(&mut def), PatchOutcome::Changed { .. }));
    assert!(def.scales.iter().any(|s| s.key == "total"));

    // Second run: the reference is no longer dangling.
    assert_eq!(WhoqolTotalScale.apply(&mut def), PatchOutcome::Unchanged);
    assert_eq!(def.scales.iter().filter(|s| s.key == "total").count(), 1);
}

#[test]
fn whoqol_without_total_cutoffs_is_left_alone() {
    let mut def = definition("whoqol-bref", vec![scale("physical")]);
    def.cutoffs = vec![cutoff("physical", 0.0, 40.0, "Poor")];

    assert_eq!(WhoqolTotalScale.apply(&mut def), PatchOutcome::Unchanged);
    assert!(def.scales.iter().all(|s| s.key != "total"));
}
