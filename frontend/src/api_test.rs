use super::*;

#[test]
fn success_range_is_accepted() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(204), Ok(()));
    assert_eq!(check_status(299), Ok(()));
}

#[test]
fn non_success_status_is_an_error() {
    assert_eq!(check_status(302), Err(ApiError::Status(302)));
    assert_eq!(check_status(404), Err(ApiError::Status(404)));
    assert_eq!(check_status(500), Err(ApiError::Status(500)));
}

#[test]
fn error_messages_carry_detail_for_logging() {
    assert_eq!(ApiError::Status(503).to_string(), "unexpected status: 503");
    assert_eq!(ApiError::MissingId.to_string(), "vehicle has no id");
    assert_eq!(
        ApiError::Network("connection refused".to_owned()).to_string(),
        "network error: connection refused"
    );
}
