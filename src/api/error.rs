//! API Errors
//!
//! Every failure a caller sees is an `ApiErrors` list of displayable
//! messages, even when there is only one.

use serde_json::Value;
use thiserror::Error;

/// Database constraint codes the backend forwards, with friendlier text
const PG_CODE_MESSAGES: &[(&str, &str)] = &[(
    "23505",
    "User under that email or phone number already exists",
)];

/// One or more user-displayable error messages
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .0.join("; "))]
pub struct ApiErrors(Vec<String>);

impl ApiErrors {
    pub fn single(message: impl Into<String>) -> Self {
        Self(vec![message.into()])
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }

    /// Normalize a failed response body of the form `{"error": {...}}`
    pub fn from_error_body(status: u16, body: Option<&Value>) -> Self {
        let fallback = || Self::single(format!("Request failed with status {}", status));

        let Some(error) = body.and_then(|b| b.get("error")) else {
            return fallback();
        };

        if let Some(text) = error.as_str() {
            return Self::single(text);
        }

        if let Some(mapped) = error.get("pgcode").and_then(pg_code_message) {
            return Self::single(mapped);
        }

        match error.get("message") {
            Some(Value::String(text)) => Self::single(text.as_str()),
            Some(Value::Array(items)) => {
                let messages: Vec<String> = items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect();
                if messages.is_empty() {
                    fallback()
                } else {
                    Self(messages)
                }
            }
            _ => fallback(),
        }
    }
}

/// Look up a `pgcode`; the backend sends it as a string but numbers are tolerated
fn pg_code_message(code: &Value) -> Option<&'static str> {
    let code = match code {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    PG_CODE_MESSAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, message)| *message)
}

/// Internal failure kinds, flattened into `ApiErrors` at the client boundary
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response from server: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Backend(#[from] ApiErrors),
}

impl From<ClientError> for ApiErrors {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Backend(errors) => errors,
            other => ApiErrors::single(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mapped_pgcode_replaces_message() {
        let body = json!({ "error": { "pgcode": "23505", "message": "duplicate key value violates unique constraint" } });
        let errors = ApiErrors::from_error_body(400, Some(&body));
        assert_eq!(
            errors.messages(),
            ["User under that email or phone number already exists".to_string()]
        );
    }

    #[test]
    fn test_numeric_pgcode_is_mapped() {
        let body = json!({ "error": { "pgcode": 23505 } });
        let errors = ApiErrors::from_error_body(400, Some(&body));
        assert_eq!(errors.messages().len(), 1);
        assert!(errors.messages()[0].starts_with("User under that email"));
    }

    #[test]
    fn test_unmapped_pgcode_passes_message_through() {
        let body = json!({ "error": { "pgcode": "23503", "message": "foreign key violation" } });
        let errors = ApiErrors::from_error_body(400, Some(&body));
        assert_eq!(errors, ApiErrors::single("foreign key violation"));
    }

    #[test]
    fn test_absent_pgcode_passes_message_through() {
        let body = json!({ "error": { "message": "Invalid credentials" } });
        assert_eq!(
            ApiErrors::from_error_body(401, Some(&body)),
            ApiErrors::single("Invalid credentials")
        );
    }

    #[test]
    fn test_message_list_is_kept_as_list() {
        let body = json!({ "error": { "message": ["name is required", "email is required"] } });
        let errors = ApiErrors::from_error_body(400, Some(&body));
        assert_eq!(errors.messages().len(), 2);
        assert_eq!(errors.messages()[1], "email is required");
    }

    #[test]
    fn test_missing_error_object_uses_status() {
        assert_eq!(
            ApiErrors::from_error_body(502, None),
            ApiErrors::single("Request failed with status 502")
        );
        let body = json!({ "detail": "nope" });
        assert_eq!(
            ApiErrors::from_error_body(404, Some(&body)),
            ApiErrors::single("Request failed with status 404")
        );
    }

    #[test]
    fn test_backend_client_error_keeps_messages() {
        let errors = ApiErrors(vec!["a".into(), "b".into()]);
        let flattened: ApiErrors = ClientError::Backend(errors.clone()).into();
        assert_eq!(flattened, errors);
        assert_eq!(flattened.into_messages(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_decode_error_becomes_single_message() {
        let err = serde_json::from_str::<Value>("{").unwrap_err();
        let flattened: ApiErrors = ClientError::from(err).into();
        assert_eq!(flattened.messages().len(), 1);
        assert!(flattened.messages()[0].starts_with("Unexpected response from server"));
    }
}
