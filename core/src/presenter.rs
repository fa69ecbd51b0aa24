//! Turns failures into the strings shown to the user.
//!
//! Total by construction: every branch yields a non-empty message.

use crate::error::{ApiError, ViewError};

pub const CONNECTION_MESSAGE: &str = "Connection error. Check whether the server is running.";
pub const UNKNOWN_MESSAGE: &str = "An unknown error occurred.";

/// Message for an API failure.
///
/// Connectivity failures get a hint about the server; decode failures are
/// reported as unknown (the raw serde message means nothing to a user); any
/// other error shows its own message.
pub fn describe(error: &ApiError) -> String {
    match error {
        ApiError::Network(_) => CONNECTION_MESSAGE.to_string(),
        ApiError::Decode(_) => UNKNOWN_MESSAGE.to_string(),
        other => non_empty(other.to_string()),
    }
}

pub fn describe_failure(error: &ViewError) -> String {
    match error {
        ViewError::Api(err) => describe(err),
        ViewError::Validation(err) => non_empty(err.to_string()),
    }
}

fn non_empty(message: String) -> String {
    if message.trim().is_empty() {
        UNKNOWN_MESSAGE.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn connection_failure_mentions_server() {
        let message = describe(&ApiError::Network("Connection refused".to_string()));
        assert_eq!(message, CONNECTION_MESSAGE);
    }

    #[test]
    fn not_found_is_not_a_connectivity_message() {
        let message = describe(&ApiError::from_status(404, ""));
        assert_eq!(message, "HTTP error! status: 404");
        assert_ne!(message, CONNECTION_MESSAGE);
    }

    #[test]
    fn server_detail_is_shown_verbatim() {
        let message = describe(&ApiError::from_status(400, r#"{"detail":"Species is required"}"#));
        assert_eq!(message, "Species is required");
    }

    #[test]
    fn decode_failure_is_unknown() {
        assert_eq!(describe(&ApiError::Decode("expected value".to_string())), UNKNOWN_MESSAGE);
    }

    #[test]
    fn empty_message_falls_back_to_unknown() {
        let err = ApiError::HttpStatus {
            status: 500,
            message: "  ".to_string(),
        };
        assert_eq!(describe(&err), UNKNOWN_MESSAGE);
    }

    #[test]
    fn validation_failure_uses_its_message() {
        let err = ViewError::from(ValidationError::NoAnimalSelected);
        assert_eq!(describe_failure(&err), "an animal must be selected");
    }
}
