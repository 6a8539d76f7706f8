use check_json_core::{Scalar, Severity};
use check_json_rules::{flatten, RuleProcessor, RuleSet};
use serde_json::Value;

fn document() -> Value {
    serde_json::from_str(include_str!("fixtures/health.json")).unwrap()
}

#[test]
fn fixture_flattens_in_document_order() {
    let properties = flatten(&document()).unwrap();

    let keys: Vec<&str> = properties.keys().collect();
    assert_eq!(
        keys,
        vec![
            "critical.module.status",
            "critical.module.id",
            "non_critical.module.id",
            "non_critical.module.status",
            "non_critical.module.MetricOne",
            "nodes.[0].name",
            "nodes.[0].healthy",
            "nodes.[0].load",
            "nodes.[1].name",
            "nodes.[1].healthy",
            "nodes.[1].load",
        ]
    );
    assert_eq!(properties.get("nodes.[1].healthy"), Some(&Scalar::from(false)));
}

#[test]
fn warning_and_critical_sets_are_independent() {
    let properties = flatten(&document()).unwrap();
    let processor = RuleProcessor::new(&properties);

    let warning = RuleSet::parse(
        Severity::Warning,
        &[r"nodes\.\[\d+\]\.healthy,true,1"],
        &[r"nodes.*\.load,~:50,1"],
        &[],
    )
    .unwrap();
    let critical = RuleSet::parse(
        Severity::Critical,
        &[],
        &[r"nodes.*\.load,~:90,1"],
        &["nodes.*leader"],
    )
    .unwrap();

    let warnings = processor.evaluate(&warning);
    let criticals = processor.evaluate(&critical);

    assert_eq!(
        warnings.failures,
        vec![
            " nodes.[1].healthy=false; nodes.[1].name=node-b; nodes.[1].load=97".to_string(),
            " nodes.[1].load=97; nodes.[1].name=node-b; nodes.[1].healthy=false".to_string(),
        ]
    );
    assert_eq!(criticals.failures.len(), 2);
    assert_eq!(
        criticals.failures[0],
        " nodes.[1].load=97; nodes.[1].name=node-b; nodes.[1].healthy=false"
    );
    assert!(criticals.failures[1].starts_with(" nodes.*leader Not Found"));
}
