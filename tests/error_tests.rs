// Error taxonomy and envelope invariants

use axum::http::StatusCode;
use dockhand::engine::EngineError;
use dockhand::error::{ApiError, ErrorKind};
use dockhand::models::Envelope;

#[test]
fn test_engine_errors_map_to_fixed_kinds() {
    let cases = [
        (
            EngineError::NotFound("no such container".into()),
            ErrorKind::NotFound,
            StatusCode::NOT_FOUND,
        ),
        (
            EngineError::Conflict("name already in use".into()),
            ErrorKind::Conflict,
            StatusCode::CONFLICT,
        ),
        (
            EngineError::Unavailable("connection refused".into()),
            ErrorKind::EngineUnavailable,
            StatusCode::SERVICE_UNAVAILABLE,
        ),
        (
            EngineError::Api("invalid reference format".into()),
            ErrorKind::EngineError,
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];
    for (engine_err, kind, status) in cases {
        let err = ApiError::from(engine_err);
        assert_eq!(err.kind, kind);
        assert_eq!(err.http_status(), status);
    }
}

#[test]
fn test_engine_error_message_kept_verbatim() {
    let err = ApiError::from(EngineError::Api("invalid reference format".into()));
    assert_eq!(err.message, "invalid reference format");
}

#[test]
fn test_validation_and_internal_statuses() {
    assert_eq!(
        ApiError::validation("x").http_status(),
        StatusCode::BAD_REQUEST
    );
    let internal = ApiError::internal();
    assert_eq!(internal.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    // Internal failures never leak details.
    assert_eq!(internal.message, "internal error");
}

#[test]
fn test_envelope_success_exclusivity() {
    let env = Envelope::success(42);
    assert!(env.success);
    assert_eq!(env.data, Some(42));
    assert_eq!(env.error, None);
    assert_eq!(env.count, None);
}

#[test]
fn test_envelope_failure_exclusivity() {
    let env: Envelope<()> = Envelope::failure("boom");
    assert!(!env.success);
    assert_eq!(env.data, None);
    assert_eq!(env.error.as_deref(), Some("boom"));
}

#[test]
fn test_envelope_list_sets_count() {
    let env = Envelope::list(vec!["a", "b", "c"]);
    assert!(env.success);
    assert_eq!(env.count, Some(3));
}

#[test]
fn test_envelope_serialization_keeps_null_keys() {
    let success = serde_json::to_value(Envelope::success("x")).unwrap();
    assert_eq!(success["data"], "x");
    assert!(success["error"].is_null());
    assert!(success.get("count").is_none());

    let failure = serde_json::to_value(Envelope::<()>::failure("boom")).unwrap();
    assert!(failure["data"].is_null());
    assert_eq!(failure["error"], "boom");
}
