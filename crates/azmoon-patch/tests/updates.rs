use azmoon_core::models::{AnalysisType, TestCutoff, TestDefinition, TestScale};
use azmoon_patch::catalog::{self, TemplateSet};
use azmoon_patch::report::UpdateStatus;
use azmoon_patch::run::apply_template_updates;
use azmoon_storage::TestStore;

fn definition(slug: &str) -> TestDefinition {
    let mut extra = serde_json::Map::new();
    extra.insert("version".to_string(), serde_json::json!(7));

    TestDefinition {
        slug: slug.to_string(),
        name: slug.to_uppercase(),
        name_fa: "نسخه فارسی".to_string(),
        category: "General".to_string(),
        category_fa: String::new(),
        description: String::new(),
        description_fa: String::new(),
        analysis_type: AnalysisType::Direct,
        warning: String::new(),
        time_minutes: 10,
        scales: vec![TestScale {
            key: "total".to_string(),
            name: "Total".to_string(),
            name_fa: "نمره کل".to_string(),
        }],
        questions: Vec::new(),
        cutoffs: vec![TestCutoff {
            scale_key: "total".to_string(),
            min: 0.0,
            max: 99.0,
            label: "Stale".to_string(),
            label_fa: String::new(),
        }],
        analysis_templates: Vec::new(),
        risk_rules: Vec::new(),
        extra,
    }
}

#[test]
fn cutoffs_and_templates_are_replaced_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let store = TestStore::new(dir.path());
    store.save("bai", &definition("bai")).unwrap();

    let sets = vec![catalog::get_template_set("bai").unwrap()];
    let reports = apply_template_updates(&store, &sets).unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].status, UpdateStatus::Updated);

    let updated = store.load("bai").unwrap();
    assert_eq!(updated.cutoffs, catalog::bai::Bai.cutoffs());
    assert_eq!(updated.analysis_templates, catalog::bai::Bai.analysis_templates());
}

#[test]
fn untouched_fields_survive_the_update() {
    let dir = tempfile::tempdir().unwrap();
    let store = TestStore::new(dir.path());
    store.save("moci", &definition("moci")).unwrap();

    let sets = vec![catalog::get_template_set("moci").unwrap()];
    apply_template_updates(&store, &sets).unwrap();

    let updated = store.load("moci").unwrap();
    assert_eq!(updated.name, "MOCI");
    assert_eq!(updated.name_fa, "نسخه فارسی");
    assert_eq!(updated.scales, definition("moci").scales);
    assert_eq!(updated.extra["version"], serde_json::json!(7));
}

#[test]
fn second_run_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = TestStore::new(dir.path());
    store.save("lsas", &definition("lsas")).unwrap();

    let sets = vec![catalog::get_template_set("lsas").unwrap()];
    apply_template_updates(&store, &sets).unwrap();
    let first = store.load("lsas").unwrap();

    apply_template_updates(&store, &sets).unwrap();
    let second = store.load("lsas").unwrap();

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn missing_files_are_skipped_and_the_rest_still_processed() {
    let dir = tempfile::tempdir().unwrap();
    let store = TestStore::new(dir.path());
    // Only two of the thirteen mapped questionnaires exist on disk.
    store.save("bai", &definition("bai")).unwrap();
    store.save("mbi", &definition("mbi")).unwrap();

    let sets = catalog::all_template_sets();
    let reports = apply_template_updates(&store, &sets).unwrap();

    assert_eq!(reports.len(), sets.len());
    for report in &reports {
        let expected = if report.slug == "bai" || report.slug == "mbi" {
            UpdateStatus::Updated
        } else {
            UpdateStatus::SkippedMissing
        };
        assert_eq!(report.status, expected, "slug {}", report.slug);
    }

    // Skipping must not create files.
    assert_eq!(store.list_slugs().unwrap(), vec!["bai", "mbi"]);
    // mbi was processed even though earlier sets were skipped.
    assert_eq!(store.load("mbi").unwrap().cutoffs, catalog::mbi::Mbi.cutoffs());
}

#[test]
fn report_order_follows_the_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let store = TestStore::new(dir.path());

    let sets = catalog::all_template_sets();
    let reports = apply_template_updates(&store, &sets).unwrap();

    let report_slugs: Vec<&str> = reports.iter().map(|r| r.slug.as_str()).collect();
    let set_slugs: Vec<&str> = sets.iter().map(|s| s.slug()).collect();
    assert_eq!(report_slugs, set_slugs);
}
