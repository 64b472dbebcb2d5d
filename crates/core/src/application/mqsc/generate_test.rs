//! Unit tests for the generate use case

use super::generate::*;
use crate::domain::{DomainError, ObjectType, ViolationReason};

fn request(object_type: &str, names: &[&str], qmgr: &str) -> GenerateRequest {
    GenerateRequest {
        object_type: object_type.to_string(),
        names: names.iter().map(|s| s.to_string()).collect(),
        qmgr_name: qmgr.to_string(),
    }
}

#[test]
fn test_validate_blank_names() {
    let req = request("Local Queue", &["", "   ", "\t"], "QM1");
    assert_eq!(validate_request(&req).unwrap_err(), DomainError::BlankNames);
}

#[test]
fn test_validate_blank_qmgr() {
    let req = request("Local Queue", &["ORDERS"], "  ");
    assert_eq!(validate_request(&req).unwrap_err(), DomainError::BlankQmgrName);
}

#[test]
fn test_blank_names_reported_before_blank_qmgr() {
    let req = request("Local Queue", &[""], "");
    assert_eq!(validate_request(&req).unwrap_err(), DomainError::BlankNames);
}

#[test]
fn test_validate_unknown_object_type() {
    let req = request("Topic", &["ORDERS"], "QM1");
    assert!(matches!(
        validate_request(&req),
        Err(DomainError::UnknownObjectType(label)) if label == "Topic"
    ));
}

#[test]
fn test_object_type_label_must_match_exactly() {
    let req = request(" Local Queue ", &["ORDERS"], "QM1");
    assert!(matches!(
        validate_request(&req),
        Err(DomainError::UnknownObjectType(label)) if label == " Local Queue "
    ));
}

#[test]
fn test_qmgr_is_trimmed() {
    let req = request("Local Queue", &["ORDERS"], "  QM1 ");
    let (object_type, qmgr) = validate_request(&req).unwrap();
    assert_eq!(object_type, ObjectType::LocalQueue);
    assert_eq!(qmgr, "QM1");
}

#[test]
fn test_generate_single_local_queue() {
    let script = execute(&request("Local Queue", &["ORDERS"], "QM1")).unwrap();

    assert!(script.text().contains(
        "DEFINE QLOCAL(QM1.ORDERS) DESCR('User-defined local queue') MAXDEPTH(5000) DEFTYPE(PREDEFINED) REPLACE"
    ));
    assert!(script.text().starts_with("\n* ********** Local Queue **********\n"));
}

#[test]
fn test_invalid_name_discards_whole_submission() {
    let err = execute(&request("Local Queue", &["ORDERS", "ORDERS", "orders"], "QM1"))
        .unwrap_err();

    match err {
        DomainError::InvalidNames(violations) => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].name, "orders");
            assert_eq!(violations[0].reason, ViolationReason::InvalidCharacters);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_every_violation_is_reported() {
    let long = "X".repeat(21);
    let err = generate_script(
        &["GOOD", "bad", long.as_str(), "ALSO.GOOD"],
        ObjectType::SenderChannel,
        "QM1",
    )
    .unwrap_err();

    let messages: Vec<String> = err.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec![
            "Sender Channel 'bad' contains invalid characters.".to_string(),
            format!("Sender Channel '{long}' exceeds 20 characters limit."),
        ]
    );
}

#[test]
fn test_duplicates_collapse_in_first_seen_order() {
    let script = generate_script(
        &["B.QUEUE", " A.QUEUE ", "B.QUEUE", "", "C.QUEUE", "A.QUEUE"],
        ObjectType::AliasQueue,
        "QM1",
    )
    .unwrap();

    assert_eq!(script.names, vec!["B.QUEUE", "A.QUEUE", "C.QUEUE"]);
    assert_eq!(script.commands().count(), 3);
}

#[test]
fn test_from_text_handles_crlf_and_padding() {
    let req = GenerateRequest::from_text("Remote Queue", "  TO.QM2 \r\n\r\nFROM.QM2\r\n", "QM1");
    let script = execute(&req).unwrap();

    assert_eq!(script.names, vec!["TO.QM2", "FROM.QM2"]);
    assert_eq!(
        script.commands().next().unwrap(),
        "DEFINE QREMOTE(QM1.TO.QM2) RNAME('TARGET.QUEUE') RQMNAME('TARGETQM') XMITQ('TRANSMIT.QUEUE') DESCR('Remote queue mapping') REPLACE"
    );
}
