use axum::http::HeaderValue;

use timbre::infrastructure::observability::{REQUEST_ID_HEADER, RequestId};

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_header_value_when_building_request_id_then_reuses_it() {
    let header = HeaderValue::from_static("abc-123");

    let request_id = RequestId::from_header(Some(&header));

    assert_eq!(request_id.as_str(), "abc-123");
}

#[test]
fn given_missing_or_blank_header_when_building_request_id_then_generates_uuid() {
    let blank = HeaderValue::from_static("   ");

    for header in [None, Some(&blank)] {
        let request_id = RequestId::from_header(header);
        assert!(uuid::Uuid::parse_str(request_id.as_str()).is_ok());
    }
}
