//! Tests for domain error construction and classification.

use super::*;
use rstest::rstest;

#[rstest]
#[case(ErrorCode::MalformedInput, "malformed_input", true)]
#[case(ErrorCode::InvalidDate, "invalid_date", true)]
#[case(ErrorCode::StorageUnavailable, "storage_unavailable", false)]
#[case(ErrorCode::StorageWriteFailed, "storage_write_failed", false)]
#[case(ErrorCode::AuditWriteFailed, "audit_write_failed", false)]
fn codes_have_stable_names_and_blame(
    #[case] code: ErrorCode,
    #[case] name: &str,
    #[case] client: bool,
) {
    assert_eq!(code.as_str(), name);
    assert_eq!(code.to_string(), name);
    assert_eq!(code.is_client_error(), client);
}

#[rstest]
fn constructors_set_matching_codes() {
    let cases = [
        (Error::malformed_input("a"), ErrorCode::MalformedInput),
        (Error::invalid_date("b"), ErrorCode::InvalidDate),
        (Error::storage_unavailable("c"), ErrorCode::StorageUnavailable),
        (Error::storage_write_failed("d"), ErrorCode::StorageWriteFailed),
        (Error::audit_write_failed("e"), ErrorCode::AuditWriteFailed),
    ];
    for (err, code) in cases {
        assert_eq!(err.code(), code);
    }
}

#[rstest]
fn display_is_the_message() {
    let err = Error::storage_write_failed("Failed to insert user: duplicate key");
    assert_eq!(err.to_string(), "Failed to insert user: duplicate key");
    assert_eq!(err.message(), "Failed to insert user: duplicate key");
}

#[tokio::test]
async fn captures_trace_id_in_scope() {
    let trace_id: TraceId = "00000000-0000-0000-0000-000000000001"
        .parse()
        .expect("valid uuid");
    let err = TraceId::scope(trace_id, async { Error::invalid_date("bad") }).await;
    assert_eq!(err.trace_id(), Some("00000000-0000-0000-0000-000000000001"));
}

#[rstest]
fn no_trace_id_out_of_scope() {
    assert!(Error::malformed_input("Invalid input").trace_id().is_none());
}
