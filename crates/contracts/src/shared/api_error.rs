//! Errors of the REST round trips and the status handling shared by every
//! catalog screen.
//!
//! The network layer only reports `(status, body)`; what that means for the
//! user is decided here so it can be tested without a browser.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Shown when the backend reports a database constraint violation
pub const CONSTRAINT_VIOLATION_MESSAGE: &str = "Error: El nombre o correo ya existe.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response (server down, CORS, DNS)
    #[error("{0}")]
    Transport(String),

    /// 409 on create/update: the name already exists
    #[error("{0}")]
    Conflict(String),

    /// Non-2xx with an error text supplied by the backend
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// Non-2xx without anything useful in the body
    #[error("Error HTTP {status}")]
    Status { status: u16 },

    /// Delete refused by the server (typically still referenced elsewhere)
    #[error("{0}")]
    Rejected(String),

    /// 2xx on the collection GET whose body is not the expected JSON
    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Error body as produced by the backend's default error handler
#[derive(Debug, Default, Deserialize)]
struct BackendErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<Vec<BackendFieldError>>,
}

#[derive(Debug, Deserialize)]
struct BackendFieldError {
    #[serde(default, rename = "defaultMessage")]
    default_message: Option<String>,
}

/// Turn a non-2xx body into the best message available.
///
/// Field errors are joined; a constraint violation becomes the duplicate
/// message; otherwise the backend message is relayed as is.
pub fn backend_error(status: u16, body: &str) -> ApiError {
    let parsed: Option<BackendErrorBody> = serde_json::from_str(body).ok();
    let Some(parsed) = parsed else {
        return ApiError::Status { status };
    };
    let Some(message) = parsed.message.filter(|m| !m.trim().is_empty()) else {
        return ApiError::Status { status };
    };

    let field_messages: Vec<String> = parsed
        .errors
        .unwrap_or_default()
        .into_iter()
        .filter_map(|e| e.default_message)
        .collect();

    let message = if !field_messages.is_empty() {
        field_messages.join(", ")
    } else if message.contains("constraint violation") {
        CONSTRAINT_VIOLATION_MESSAGE.to_string()
    } else {
        message
    };
    ApiError::Backend { status, message }
}

/// GET on a collection: a `null` or empty body is an empty list
pub fn parse_list_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<Vec<T>, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Status { status });
    }
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str::<Option<Vec<T>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST/PUT: any 2xx succeeds whatever the body holds, 409 is a duplicate.
///
/// The record is already stored once the server answers 2xx, and the list
/// is reloaded afterwards, so the body is never read.
pub fn parse_save_response(status: u16, body: &str, conflict_message: &str) -> Result<(), ApiError> {
    if status == 409 {
        return Err(ApiError::Conflict(conflict_message.to_string()));
    }
    if !is_success(status) {
        return Err(backend_error(status, body));
    }
    Ok(())
}

/// DELETE: the body is ignored, any non-2xx maps to the entity's failure text
pub fn parse_delete_response(status: u16, rejected_message: &str) -> Result<(), ApiError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(ApiError::Rejected(rejected_message.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_list_null_body_is_empty() {
        assert_eq!(parse_list_response::<Item>(200, "null"), Ok(vec![]));
        assert_eq!(parse_list_response::<Item>(200, ""), Ok(vec![]));
        assert_eq!(
            parse_list_response::<Item>(200, r#"[{"id":1},{"id":2}]"#),
            Ok(vec![Item { id: 1 }, Item { id: 2 }])
        );
    }

    #[test]
    fn test_list_error_status() {
        let err = parse_list_response::<Item>(500, "boom").unwrap_err();
        assert_eq!(err, ApiError::Status { status: 500 });
        assert_eq!(err.to_string(), "Error HTTP 500");
    }

    #[test]
    fn test_list_malformed_body() {
        let err = parse_list_response::<Item>(200, "{not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_save_created() {
        assert_eq!(parse_save_response(201, r#"{"id":7,"nombre":"PET"}"#, "dup"), Ok(()));
        assert_eq!(parse_save_response(200, r#"{"id":7}"#, "dup"), Ok(()));
    }

    #[test]
    fn test_save_tolerates_empty_body() {
        assert_eq!(parse_save_response(200, "", "dup"), Ok(()));
        assert_eq!(parse_save_response(204, "", "dup"), Ok(()));
        assert_eq!(parse_save_response(200, "null", "dup"), Ok(()));
    }

    #[test]
    fn test_save_tolerates_malformed_body() {
        assert_eq!(parse_save_response(200, "<html>ok</html>", "dup"), Ok(()));
        assert_eq!(parse_save_response(201, r#"{"nombre":"Acme"}"#, "dup"), Ok(()));
        assert_eq!(parse_save_response(201, r#"{"id":"x","nombre":3}"#, "dup"), Ok(()));
    }

    #[test]
    fn test_save_conflict() {
        let err = parse_save_response(409, "", "Este material ya existe.").unwrap_err();
        assert_eq!(err, ApiError::Conflict("Este material ya existe.".to_string()));
    }

    #[test]
    fn test_save_generic_status() {
        let err = parse_save_response(500, "<html>oops</html>", "dup").unwrap_err();
        assert_eq!(err.to_string(), "Error HTTP 500");
    }

    #[test]
    fn test_backend_field_errors_are_joined() {
        let body = r#"{"message":"Validation failed","errors":[
            {"defaultMessage":"El nombre del material no puede estar vacío"},
            {"defaultMessage":"El nombre debe tener al menos 3 caracteres"}]}"#;
        let err = parse_save_response(400, body, "dup").unwrap_err();
        assert_eq!(
            err.to_string(),
            "El nombre del material no puede estar vacío, El nombre debe tener al menos 3 caracteres"
        );
        assert!(matches!(err, ApiError::Backend { status: 400, .. }));
    }

    #[test]
    fn test_backend_constraint_violation() {
        let body = r#"{"message":"could not execute statement; constraint violation [uk_nombre]"}"#;
        let err = parse_save_response(500, body, "dup").unwrap_err();
        assert_eq!(err.to_string(), CONSTRAINT_VIOLATION_MESSAGE);
    }

    #[test]
    fn test_backend_plain_message_is_relayed() {
        let body = r#"{"message":"No se encontro un proveedor con ese ID"}"#;
        let err = parse_save_response(500, body, "dup").unwrap_err();
        assert_eq!(err.to_string(), "No se encontro un proveedor con ese ID");
    }

    #[test]
    fn test_delete() {
        assert_eq!(parse_delete_response(200, "en uso"), Ok(()));
        assert_eq!(parse_delete_response(204, "en uso"), Ok(()));
        assert_eq!(
            parse_delete_response(409, "en uso"),
            Err(ApiError::Rejected("en uso".to_string()))
        );
    }
}
