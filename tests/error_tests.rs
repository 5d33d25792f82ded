//! Integration tests for the error types.

use rax_errors::{ClientException, ClientExceptionKind, MarkerError, RaxError, RaxResult};

fn find_object(container: &str, name: &str) -> RaxResult<()> {
    match (container, name) {
        ("", _) => Err(MarkerError::MissingName.into()),
        ("photos", "cat.jpg") => Ok(()),
        ("photos", _) => Err(MarkerError::NoSuchObject.into()),
        _ => Err(MarkerError::NoSuchContainer.into()),
    }
}

#[test]
fn test_markers_propagate_through_result() {
    assert!(find_object("photos", "cat.jpg").is_ok());
    assert!(matches!(
        find_object("photos", "dog.jpg"),
        Err(RaxError::Marker(MarkerError::NoSuchObject))
    ));
    assert!(matches!(
        find_object("videos", "a.mp4"),
        Err(RaxError::Marker(MarkerError::NoSuchContainer))
    ));
    assert!(matches!(
        find_object("", "a"),
        Err(RaxError::Marker(MarkerError::MissingName))
    ));
}

#[test]
fn test_markers_are_distinct() {
    assert_ne!(MarkerError::FileNotFound, MarkerError::FolderNotFound);
    assert_ne!(MarkerError::CDNFailed, MarkerError::NotCDNEnabled);
    assert_eq!(MarkerError::InvalidUploadID, MarkerError::InvalidUploadID);
}

#[test]
fn test_marker_set_is_complete() {
    assert_eq!(MarkerError::ALL_NAMES.len(), 21);
    for name in [
        "AuthenticationFailed",
        "InvalidCDNMetadata",
        "NoTokenLookupException",
        "AmbiguousEndpoints",
    ] {
        assert!(MarkerError::from_name(name).is_some(), "missing {}", name);
    }
}

#[test]
fn test_ambiguous_endpoints_carries_list() {
    let error = MarkerError::ambiguous_endpoints(vec!["DFW", "ORD", "IAD"]);

    assert_eq!(error.name(), "AmbiguousEndpoints");
    assert_eq!(
        error.endpoints(),
        Some(&["DFW".to_string(), "ORD".to_string(), "IAD".to_string()][..])
    );
    assert!(error.to_string().starts_with("AmbiguousEndpoints: "));
}

#[test]
fn test_client_exception_builder() {
    let error = ClientException::builder(ClientExceptionKind::Unauthorized, 401)
        .message("Token expired")
        .details("Re-authenticate")
        .request_id("req-55")
        .build();

    assert_eq!(error.kind(), ClientExceptionKind::Unauthorized);
    assert_eq!(error.code(), 401);
    assert_eq!(error.message(), Some("Token expired"));
    assert_eq!(error.details(), Some("Re-authenticate"));
    assert_eq!(error.request_id(), Some("req-55"));
    assert_eq!(error.to_string(), "Token expired (HTTP 401) (Request-ID: req-55)");
}

#[test]
fn test_kind_bindings() {
    let expected = [
        (ClientExceptionKind::BadRequest, 400, "Bad request", "BadRequest"),
        (ClientExceptionKind::Unauthorized, 401, "Unauthorized", "Unauthorized"),
        (ClientExceptionKind::Forbidden, 403, "Forbidden", "Forbidden"),
        (ClientExceptionKind::NotFound, 404, "Not found", "NotFound"),
        (ClientExceptionKind::OverLimit, 413, "Over limit", "OverLimit"),
        (ClientExceptionKind::HttpNotImplemented, 501, "Not Implemented", "HTTPNotImplemented"),
    ];

    for (kind, status, message, name) in expected {
        assert_eq!(kind.http_status(), Some(status));
        assert_eq!(kind.default_message(), Some(message));
        assert_eq!(kind.name(), name);
        assert_eq!(ClientExceptionKind::for_status(status), kind);
    }

    assert_eq!(ClientExceptionKind::Generic.http_status(), None);
    assert_eq!(ClientExceptionKind::Generic.name(), "ClientException");
}

#[test]
fn test_client_exception_is_std_error() {
    let error: Box<dyn std::error::Error + Send + Sync> =
        Box::new(ClientException::from_status(404));
    assert_eq!(error.to_string(), "Not found (HTTP 404)");
}

#[test]
fn test_configuration_error_display() {
    let error = RaxError::configuration("bad header");
    assert_eq!(error.to_string(), "Configuration error: bad header");
    assert_eq!(error.status_code(), None);
}
