//! End-to-end tests for the batch transformation orchestrator.

use vitals_core::transform_batch;
use vitals_model::{ErrorKind, RawRecord, SourceTable};

fn sample_patients() -> Vec<RawRecord> {
    vec![
        RawRecord::new()
            .with("id", "p1")
            .with("name", "Alice Wonderland")
            .with("dob", "1990-01-01")
            .with("gender", "Female")
            .with("email", "alice@example.com")
            .with("phone", "555-1234"),
        RawRecord::new()
            .with("id", "p2")
            .with("name", "Bob The Builder")
            .with("dob", "03/15/1985")
            .with("email", "bob@"),
        // No identifier: rejected, referenced by batch position.
        RawRecord::new()
            .with("name", "No ID Charlie")
            .with("dob", "1950-07-30"),
    ]
}

fn sample_readings() -> Vec<RawRecord> {
    vec![
        RawRecord::new()
            .with("reading_id", "r1")
            .with("patient_id", "p1")
            .with("timestamp", "2023-01-01T10:00:00Z")
            .with("glucose", 120.5)
            .with("systolic_bp", 120)
            .with("diastolic_bp", 80),
        // Timestamp regression for p1.
        RawRecord::new()
            .with("reading_id", "r2")
            .with("patient_id", "p1")
            .with("timestamp", "2023-01-01T09:00:00Z")
            .with("glucose", 110.0),
        // Diastolic above systolic: advisory, still emitted.
        RawRecord::new()
            .with("reading_id", "r4")
            .with("patient_id", "p2")
            .with("timestamp", "2023-01-02T14:00:00Z")
            .with("systolic_bp", 130)
            .with("diastolic_bp", 150),
        // Unparseable timestamp: rejected.
        RawRecord::new()
            .with("reading_id", "r5")
            .with("patient_id", "p4")
            .with("timestamp", "invalid_timestamp")
            .with("glucose", 100.0),
    ]
}

#[test]
fn empty_batch_yields_empty_outputs_and_zero_counts() {
    let outcome = transform_batch(&[], &[]);
    assert!(outcome.patients.is_empty());
    assert!(outcome.readings.is_empty());
    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.summary.raw_patients, 0);
    assert_eq!(outcome.summary.raw_readings, 0);
    assert_eq!(outcome.summary.valid_patients, 0);
    assert_eq!(outcome.summary.valid_readings, 0);
    assert_eq!(outcome.summary.error_records, 0);
}

#[test]
fn batch_partitions_into_valid_and_error_sets() {
    let outcome = transform_batch(&sample_patients(), &sample_readings());

    let patient_ids: Vec<&str> = outcome.patients.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(patient_ids, vec!["p1", "p2"]);

    // Bob's bad email is advisory: reported, field absent.
    let bob = &outcome.patients[1];
    assert_eq!(bob.email, None);
    assert_eq!(bob.dob.map(|d| d.to_string()), Some("1985-03-15".to_string()));

    let reading_ids: Vec<&str> = outcome.readings.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(reading_ids, vec!["r1", "r2", "r4"]);

    let findings: Vec<(ErrorKind, String)> = outcome
        .errors
        .iter()
        .map(|e| (e.kind, e.reference.to_string()))
        .collect();
    assert_eq!(
        findings,
        vec![
            (ErrorKind::InvalidFormat, "p2".to_string()), // bad email
            (ErrorKind::MissingField, "#2".to_string()),  // Charlie has no id
            (ErrorKind::LogicalInconsistency, "r4".to_string()),
            (ErrorKind::InvalidFormat, "r5".to_string()), // bad timestamp
            (ErrorKind::OutOfOrder, "r2".to_string()),
        ]
    );

    assert_eq!(outcome.summary.raw_patients, 3);
    assert_eq!(outcome.summary.raw_readings, 4);
    assert_eq!(outcome.summary.valid_patients, 2);
    assert_eq!(outcome.summary.valid_readings, 3);
    assert_eq!(outcome.summary.error_records, outcome.errors.len());
}

#[test]
fn logical_inconsistency_is_advisory() {
    let readings = vec![
        RawRecord::new()
            .with("reading_id", "r1")
            .with("timestamp", "2023-01-01T10:00:00Z")
            .with("systolic_bp", 120)
            .with("diastolic_bp", 130),
    ];

    let outcome = transform_batch(&[], &readings);
    assert_eq!(outcome.readings.len(), 1);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].kind, ErrorKind::LogicalInconsistency);
    assert_eq!(outcome.errors[0].source, SourceTable::DeviceReadings);
    assert_eq!(outcome.errors[0].field, "blood_pressure");
}

#[test]
fn rejected_reading_does_not_feed_the_ordering_audit() {
    // The rejected 12:00 reading must not create a watermark that would
    // flag the later valid 09:00 reading.
    let readings = vec![
        RawRecord::new()
            .with("reading_id", "r1")
            .with("patient_id", "p1")
            .with("timestamp", "2023-01-01T08:00:00Z"),
        RawRecord::new()
            .with("patient_id", "p1")
            .with("timestamp", "2023-01-01T12:00:00Z"), // no reading_id: rejected
        RawRecord::new()
            .with("reading_id", "r3")
            .with("patient_id", "p1")
            .with("timestamp", "2023-01-01T09:00:00Z"),
    ];

    let outcome = transform_batch(&[], &readings);
    assert_eq!(outcome.readings.len(), 2);
    assert!(
        outcome.errors.iter().all(|e| e.kind != ErrorKind::OutOfOrder),
        "rejected reading leaked into the ordering audit"
    );
}

#[test]
fn reruns_produce_the_same_partition() {
    let first = transform_batch(&sample_patients(), &sample_readings());
    let second = transform_batch(&sample_patients(), &sample_readings());

    assert_eq!(first.patients, second.patients);
    assert_eq!(first.readings, second.readings);
    assert_eq!(first.summary, second.summary);
    for (a, b) in first.errors.iter().zip(&second.errors) {
        assert_eq!(a.reference, b.reference);
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.field, b.field);
        assert_eq!(a.message, b.message);
    }
}
