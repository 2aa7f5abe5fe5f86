use vitals_model::{
    ErrorKind, ErrorRecord, RecordRef, Requirement, SourceTable, patient_schema, reading_schema,
};

#[test]
fn error_kind_serializes_snake_case() {
    let json = serde_json::to_string(&ErrorKind::LogicalInconsistency).expect("serialize kind");
    assert_eq!(json, "\"logical_inconsistency\"");

    let round: ErrorKind = serde_json::from_str("\"out_of_order\"").expect("deserialize kind");
    assert_eq!(round, ErrorKind::OutOfOrder);
}

#[test]
fn error_record_round_trips() {
    let record = ErrorRecord::new(
        RecordRef::Id("r1".to_string()),
        SourceTable::DeviceReadings,
        "glucose",
        ErrorKind::OutOfRange,
        "glucose outside plausible range 0-1000",
        "5000",
    );

    let json = serde_json::to_string(&record).expect("serialize record");
    let round: ErrorRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
}

#[test]
fn record_ref_display() {
    assert_eq!(RecordRef::Id("p1".to_string()).to_string(), "p1");
    assert_eq!(RecordRef::Index(3).to_string(), "#3");
}

#[test]
fn patient_schema_marks_only_identity_fields_mandatory() {
    let schema = patient_schema();
    let mandatory: Vec<&str> = schema
        .fields
        .iter()
        .filter(|spec| spec.requirement == Requirement::Mandatory)
        .map(|spec| spec.name)
        .collect();
    assert_eq!(mandatory, vec!["id", "name"]);
    assert_eq!(schema.id_field, "id");
}

#[test]
fn reading_schema_bounds_all_biometrics() {
    let schema = reading_schema();
    for name in ["glucose", "systolic_bp", "diastolic_bp", "weight"] {
        let spec = schema.field(name).expect("biometric spec");
        assert!(spec.bounds.is_some(), "{name} should carry bounds");
        assert_eq!(spec.requirement, Requirement::Optional);
    }
    let timestamp = schema.field("timestamp").expect("timestamp spec");
    assert!(timestamp.is_mandatory());
}
