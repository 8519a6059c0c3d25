//! Unit tests for the data model, the wire conversion, and the report type.
mod common;
use common::*;
use kenshou::prelude::*;

#[test]
fn test_display_label_falls_back_to_id() {
    let unlabeled = component("a", input());
    assert_eq!(unlabeled.display_label(), "a");

    let labeled = labeled_component("a", "Source Feed", input());
    assert_eq!(labeled.display_label(), "Source Feed");
}

#[test]
fn test_known_kind_accessor() {
    assert!(component("a", input()).known_kind().is_some());
    assert!(untyped_component("a").known_kind().is_none());

    let unknown = ComponentDefinition {
        id: "a".to_string(),
        kind: Some(KindTag::Unknown("widget".to_string())),
        label: None,
        position: None,
    };
    assert!(unknown.known_kind().is_none());
}

#[test]
fn test_component_kind_names() {
    let kinds = [input(), process(), output(), condition()];
    let names: Vec<&str> = kinds
        .iter()
        .filter_map(|k| match k {
            KindTag::Known(kind) => Some(kind.name()),
            KindTag::Unknown(_) => None,
        })
        .collect();
    assert_eq!(names, ["input", "process", "output", "condition"]);
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let err = UiWorkflow::from_json("{ not json").unwrap_err();
    assert!(err.to_string().contains("Failed to parse workflow JSON"));
}

#[test]
fn test_conversion_error_display() {
    let err = WorkflowConversionError::ValidationError("no nodes".to_string());
    assert!(err.to_string().contains("Invalid custom workflow data"));
    assert!(err.to_string().contains("no nodes"));
}

#[test]
fn test_conversion_normalizes_empty_strings() {
    let workflow = UiWorkflow::from_json(
        r#"{
            "components": [{
                "id": "a",
                "data": { "type": "input", "label": "", "config": { "inputType": "" } }
            }],
            "connections": [{ "id": "", "source": "a", "target": "", "sourceHandle": "" }]
        }"#,
    )
    .unwrap()
    .into_workflow()
    .unwrap();

    let component = &workflow.components[0];
    assert_eq!(component.label, None);
    assert_eq!(
        component.known_kind(),
        Some(&ComponentKind::Input(InputConfig { input_type: None }))
    );

    let connection = &workflow.connections[0];
    assert!(connection.target.is_empty());
    assert_eq!(connection.source_handle, None);
}

#[test]
fn test_conversion_keeps_position() {
    let workflow = UiWorkflow::from_json(
        r#"{ "components": [{ "id": "a", "data": { "type": "input" },
             "position": { "x": 12.0, "y": 34.5 } }], "connections": [] }"#,
    )
    .unwrap()
    .into_workflow()
    .unwrap();

    assert_eq!(
        workflow.components[0].position,
        Some(Position { x: 12.0, y: 34.5 })
    );
}

#[test]
fn test_report_accessors_split_on_prefix() {
    let report = ValidationReport::aggregate(
        vec!["missing id".to_string()],
        vec!["no outputs".to_string()],
        vec!["consider a label".to_string()],
    );

    assert!(!report.valid);
    assert_eq!(
        report.blocking().collect::<Vec<_>>(),
        ["missing id", "no outputs"]
    );
    assert_eq!(report.warnings().collect::<Vec<_>>(), ["consider a label"]);
    assert_eq!(report.errors[2], format!("{WARNING_PREFIX}consider a label"));
}

#[test]
fn test_aggregate_valid_iff_no_blocking_errors() {
    let clean = ValidationReport::aggregate(vec![], vec![], vec!["hint".to_string()]);
    assert!(clean.valid);

    let structural = ValidationReport::aggregate(vec!["bad".to_string()], vec![], vec![]);
    assert!(!structural.valid);

    let critical = ValidationReport::aggregate(vec![], vec!["bad".to_string()], vec![]);
    assert!(!critical.valid);
}

#[test]
fn test_report_deserializes_from_wire_shape() {
    let report: ValidationReport =
        serde_json::from_value(serde_json::json!({ "valid": true, "errors": [] })).unwrap();
    assert!(report.valid);
    assert!(report.errors.is_empty());
}
