//! End-to-end scenarios through the public pipeline API.

use bim_agents::{
    delegate, detect, run, ElementKind, GenerationError, ParamValue, Pipeline, RoofShape,
};

#[test]
fn test_beam_scenario() {
    let command = "Crée une poutre de 30x50cm au niveau 2 sur l'axe A";
    let (kind, passed) = detect(command);
    assert_eq!(kind, Some(ElementKind::Beam));

    let result = delegate(ElementKind::Beam, passed);
    assert!(result.success);
    assert!(result.error.is_none());

    let metadata = result.metadata.unwrap();
    assert_eq!(metadata.get("width"), Some(&ParamValue::Int(300)));
    assert_eq!(metadata.get("height"), Some(&ParamValue::Int(500)));
    assert_eq!(metadata.get("level"), Some(&ParamValue::text("Niveau 2")));
    assert_eq!(metadata.get("axis"), Some(&ParamValue::text("A")));

    let artifact = result.artifact.unwrap();
    assert!(artifact.contains(command));
    assert!(artifact.contains("TARGET_AXIS = \"A\""));
}

#[test]
fn test_floor_scenario() {
    let result = run("Dalle de 20cm structurelle au rez-de-chaussée");
    assert!(result.success);

    let metadata = result.metadata.unwrap();
    assert_eq!(metadata.element_type, ElementKind::Floor);
    assert_eq!(metadata.get("thickness"), Some(&ParamValue::Float(200.0)));
    assert_eq!(metadata.get("level"), Some(&ParamValue::text("Rez-de-chaussée")));
    assert_eq!(metadata.get("structural"), Some(&ParamValue::Bool(true)));
}

#[test]
fn test_wall_defaults_scenario() {
    let result = run("Crée un mur");
    assert!(result.success);

    let metadata = result.metadata.unwrap();
    assert_eq!(metadata.element_type, ElementKind::Wall);
    assert_eq!(metadata.get("thickness"), Some(&ParamValue::Float(200.0)));
    assert_eq!(metadata.get("height"), Some(&ParamValue::Float(3.0)));
    assert_eq!(metadata.get("level"), Some(&ParamValue::text("Niveau 1")));
    assert_eq!(metadata.params.len(), 3);
}

#[test]
fn test_roof_percent_slope() {
    let result = run("toit avec une pente de 100%");
    let metadata = result.metadata.unwrap();
    let slope = metadata.get("slope").and_then(|v| v.as_float()).unwrap();
    assert!((slope - 45.0).abs() < 1e-9);
    assert_eq!(
        metadata.get("roof_type"),
        Some(&ParamValue::Shape(RoofShape::Sloped))
    );
}

#[test]
fn test_no_intent_envelope() {
    let result = run("Quelle heure est-il ?");
    assert!(!result.success);
    assert!(result.artifact.is_none());
    assert!(result.metadata.is_none());
    assert_eq!(result.failure, Some(GenerationError::NoIntentMatched));
}

#[test]
fn test_envelope_json_shape() {
    let json = serde_json::to_value(run("Crée un mur")).unwrap();
    let object = json.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["artifact", "error", "metadata", "success"]);

    assert_eq!(json["success"], true);
    assert!(json["error"].is_null());
    assert_eq!(json["metadata"]["element_type"], "wall");
    assert_eq!(json["metadata"]["thickness"], 200.0);

    let failed = serde_json::to_value(run("rien")).unwrap();
    assert_eq!(failed["success"], false);
    assert!(failed["artifact"].is_null());
    assert!(failed["metadata"].is_null());
    assert!(failed["error"].is_string());
}

#[test]
fn test_metadata_follows_schema_order() {
    let cases = [
        ("poutre", vec!["width", "height", "level", "axis"]),
        ("colonne", vec!["width", "depth", "level", "height"]),
        ("mur", vec!["thickness", "height", "level"]),
        ("toit", vec!["roof_type", "slope", "level"]),
        ("dalle", vec!["thickness", "level", "structural"]),
    ];
    for (command, expected) in cases {
        let metadata = run(command).metadata.unwrap();
        let names: Vec<&str> = metadata.params.names().collect();
        assert_eq!(names, expected, "{}", command);
    }
}

#[test]
fn test_pipeline_reports_detected_kind() {
    let outcome = Pipeline::new().process("add a column 30x30cm");
    assert_eq!(outcome.kind, Some(ElementKind::Column));
    assert!(outcome.result.success);
}

#[test]
fn test_calls_run_concurrently() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let command = format!("mur de {}cm", 10 + i);
                run(&command)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        let thickness = result.metadata.unwrap().get("thickness").cloned();
        assert_eq!(thickness, Some(ParamValue::Float((10 + i) as f64 * 10.0)));
    }
}
