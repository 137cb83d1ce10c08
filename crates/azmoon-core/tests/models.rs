use azmoon_core::models::{AnalysisType, TestDefinition};
use serde_json::json;

fn sample_document() -> serde_json::Value {
    json!({
        "slug": "bai",
        "name": "Beck Anxiety Inventory",
        "nameFa": "پرسشنامه اضطراب بک",
        "category": "Anxiety",
        "categoryFa": "اضطراب",
        "description": "21-item anxiety screen.",
        "descriptionFa": "غربالگری اضطراب با ۲۱ گویه.",
        "analysis_type": "direct",
        "warning": "",
        "timeMinutes": 10,
        "scales": [
            { "key": "total", "name": "Total", "nameFa": "نمره کل" }
        ],
        "questions": [
            {
                "order": 1,
                "text": "Numbness or tingling",
                "textFa": "بی‌حسی یا مورمور شدن",
                "scaleKey": "total",
                "options": [
                    { "text": "Not at all", "textFa": "اصلاً", "score": 0 },
                    { "text": "Severely", "textFa": "شدید", "score": 3 }
                ]
            }
        ],
        "cutoffs": [
            { "scaleKey": "total", "min": 0, "max": 7, "label": "Minimal", "labelFa": "حداقلی" }
        ],
        "analysis_templates": [],
        "risk_rules": [
            { "condition": "q9 >= 2", "message": "seek help", "severity": "critical" }
        ],
        "version": 3,
        "source": "manual-import"
    })
}

#[test]
fn camel_case_fields_map_onto_snake_case() {
    let def: TestDefinition = serde_json::from_value(sample_document()).unwrap();

    assert_eq!(def.name_fa, "پرسشنامه اضطراب بک");
    assert_eq!(def.time_minutes, 10);
    assert_eq!(def.analysis_type, AnalysisType::Direct);
    assert_eq!(def.questions[0].scale_key, "total");
    assert_eq!(def.cutoffs[0].label_fa, "حداقلی");
}

#[test]
fn unmodeled_fields_survive_a_round_trip() {
    let def: TestDefinition = serde_json::from_value(sample_document()).unwrap();
    let out = serde_json::to_value(&def).unwrap();

    // Top-level fields this tooling does not model.
    assert_eq!(out["version"], json!(3));
    assert_eq!(out["source"], json!("manual-import"));
    // Nested Persian text lives outside the modeled fields too.
    assert_eq!(out["questions"][0]["textFa"], json!("بی‌حسی یا مورمور شدن"));
    assert_eq!(out["questions"][0]["options"][0]["textFa"], json!("اصلاً"));
}

#[test]
fn absent_question_flags_stay_absent_on_rewrite() {
    let def: TestDefinition = serde_json::from_value(sample_document()).unwrap();
    let out = serde_json::to_value(&def).unwrap();

    let question = out["questions"][0].as_object().unwrap();
    assert!(!question.contains_key("riskItem"));
    assert!(!question.contains_key("reverse"));
}

#[test]
fn missing_optional_lists_default_to_empty() {
    let mut doc = sample_document();
    let obj = doc.as_object_mut().unwrap();
    obj.remove("cutoffs");
    obj.remove("analysis_templates");
    obj.remove("risk_rules");

    let def: TestDefinition = serde_json::from_value(doc).unwrap();
    assert!(def.cutoffs.is_empty());
    assert!(def.analysis_templates.is_empty());
    assert!(def.risk_rules.is_empty());
}
