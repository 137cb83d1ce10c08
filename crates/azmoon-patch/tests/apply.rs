use azmoon_core::models::{AnalysisType, TestCutoff, TestDefinition, TestQuestion, TestScale};
use azmoon_patch::PatchError;
use azmoon_patch::patches::all_patches;
use azmoon_patch::report::PatchStatus;
use azmoon_patch::run::apply_patches;
use azmoon_storage::{StorageError, TestStore};

fn scale(key: &str) -> TestScale {
    TestScale {
        key: key.to_string(),
        name: key.to_string(),
        name_fa: String::new(),
    }
}

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

fn seed_broken_files(store: &TestStore) {
    let mut mbi = definition(
        "mbi",
        vec![scale("exhaustion"), scale("depersonalization"), scale("accomplishment")],
    );
    mbi.questions = vec![TestQuestion {
        order: 1,
        text: "I feel emotionally drained from my work".to_string(),
        scale_key: "exhaustion".to_string(),
        risk_item: None,
        reverse: None,
        options: Vec::new(),
        extra: serde_json::Map::new(),
    }];
    store.save("mbi", &mbi).unwrap();

    store
        .save("enrich", &definition("enrich", vec![scale("communication")]))
        .unwrap();

    let mut whoqol = definition("whoqol-bref", vec![scale("physical")]);
    whoqol.cutoffs = vec![TestCutoff {
        scale_key: "total".to_string(),
        min: 0.0,
        max: 40.0,
        label: "Poor".to_string(),
        label_fa: String::new(),
    }];
    store.save("whoqol-bref", &whoqol).unwrap();
}

#[test]
fn full_run_fixes_all_three_files_and_settles() {
    let dir = tempfile::tempdir().unwrap();
    let store = TestStore::new(dir.path());
    seed_broken_files(&store);

    let reports = apply_patches(&store, &all_patches()).unwrap();
    assert_eq!(reports.len(), 3);
    assert!(reports.iter().all(|r| r.status == PatchStatus::Applied));

    let mbi = store.load("mbi").unwrap();
    assert_eq!(mbi.questions[0].scale_key, "emotional_exhaustion");
    assert!(store.load("enrich").unwrap().scales.iter().any(|s| s.key == "total"));
    assert!(store.load("whoqol-bref").unwrap().scales.iter().any(|s| s.key == "total"));

    // Everything is consistent now: a second run writes nothing.
    let reports = apply_patches(&store, &all_patches()).unwrap();
    assert!(reports.iter().all(|r| r.status == PatchStatus::Unchanged));
}

#[test]
fn missing_target_file_aborts_the_corrective_run() {
    let dir = tempfile::tempdir().unwrap();
    let store = TestStore::new(dir.path());

    match apply_patches(&store, &all_patches()) {
        Err(PatchError::Storage(StorageError::NotFound { path })) => {
            assert!(path.ends_with("mbi.json"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}
