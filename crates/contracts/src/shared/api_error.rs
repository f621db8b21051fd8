use serde::{Deserialize, Serialize};

/// Error body returned by the REST services: `{ "error": "..." }`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: Option<String>,
}

/// Message for a failed HTTP call: the service error when the body carries
/// one, otherwise status and raw body
pub fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse { error: Some(msg) }) if !msg.trim().is_empty() => msg,
        _ if body.trim().is_empty() => format!("HTTP {}", status),
        _ => format!("HTTP {}: {}", status, body.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_service_error() {
        assert_eq!(
            error_message(422, r#"{"error":"Deadline is in the past"}"#),
            "Deadline is in the past"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        assert_eq!(error_message(502, ""), "HTTP 502");
        assert_eq!(error_message(500, "boom"), "HTTP 500: boom");
        assert_eq!(error_message(400, r#"{"error":null}"#), r#"HTTP 400: {"error":null}"#);
    }
}
