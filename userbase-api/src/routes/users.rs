//! User CRUD endpoints
//!
//! # Endpoints
//!
//! - `POST   /api/users` - Create user
//! - `GET    /api/users` - List users
//! - `GET    /api/users/:id` - Get user
//! - `PUT    /api/users/:id` - Replace user (full replace, all fields)
//! - `DELETE /api/users/:id` - Delete user
//!
//! Request bodies are deserialized into [`UserPayload`], a typed schema with
//! optional fields: a malformed or absent body is treated as an empty
//! payload and reported as missing fields, never as a parse error. The
//! validation step runs before any database access.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use userbase_shared::models::user::{NewUser, User};

/// Fixed message for absent or empty required fields
const MISSING_FIELDS: &str = "name, email, and date are required";

/// Create/replace request payload
///
/// All fields optional at the deserialization boundary so that presence is
/// checked in one place, with one error message, for every combination of
/// missing keys.
#[derive(Debug, Default, Deserialize)]
pub struct UserPayload {
    /// Display name
    pub name: Option<String>,

    /// Email address (must be unique)
    pub email: Option<String>,

    /// Calendar date as "YYYY-MM-DD"
    pub date: Option<String>,
}

impl UserPayload {
    /// Deserializes a request body, treating malformed JSON as empty
    ///
    /// An unreadable body yields a payload with no fields set, which the
    /// validation step reports as missing fields.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// Validates presence of all three fields and parses the date
    ///
    /// # Errors
    ///
    /// - Any absent or empty field: 400 with the fixed missing-fields
    ///   message
    /// - A present but unparseable date: 400 naming the expected format
    pub fn into_new_user(self) -> ApiResult<NewUser> {
        let name = self.name.filter(|v| !v.is_empty());
        let email = self.email.filter(|v| !v.is_empty());
        let date = self.date.filter(|v| !v.is_empty());

        let (Some(name), Some(email), Some(date)) = (name, email, date) else {
            return Err(ApiError::BadRequest(MISSING_FIELDS.to_string()));
        };

        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|_| {
            ApiError::BadRequest("date must be a valid YYYY-MM-DD date".to_string())
        })?;

        Ok(NewUser { name, email, date })
    }
}

/// Delete confirmation response
#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    /// Confirmation message
    pub message: String,
}

/// Parses a path segment as a user id
///
/// A non-integer segment is a routing-level miss, reported as not-found
/// rather than a bad request; no numeric coercion is attempted.
fn parse_user_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::NotFound("User not found".to_string()))
}

/// Create user
///
/// # Endpoint
///
/// ```text
/// POST /api/users
/// Content-Type: application/json
///
/// { "name": "Paras", "email": "paras@example.com", "date": "2025-09-11" }
/// ```
///
/// # Response
///
/// `201 Created` with the persisted record:
///
/// ```json
/// { "id": 1, "name": "Paras", "email": "paras@example.com", "date": "2025-09-11" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: missing or empty required fields (no database
///   access occurs)
/// - `409 Conflict`: email already exists
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<User>)> {
    let data = UserPayload::from_body(&body).into_new_user()?;

    let user = User::create(&state.db, data).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// List users
///
/// Returns all users ordered by ascending id; an empty array when the
/// table is empty.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::list(&state.db).await?;

    Ok(Json(users))
}

/// Get user by id
///
/// # Errors
///
/// - `404 Not Found`: no row for the id, or a non-integer path segment
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let id = parse_user_id(&id)?;

    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// Replace user (PUT semantics: all fields rewritten)
///
/// Validation is identical to create. Existence is verified before the
/// write, so a request targeting a missing id with a colliding email is
/// reported as not-found, not conflict.
///
/// # Errors
///
/// - `400 Bad Request`: missing or empty required fields
/// - `404 Not Found`: no row for the id
/// - `409 Conflict`: new email already exists on another row
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<User>> {
    let id = parse_user_id(&id)?;
    let data = UserPayload::from_body(&body).into_new_user()?;

    if User::find_by_id(&state.db, id).await?.is_none() {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    let user = User::update(&state.db, id, data)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// Delete user (hard delete)
///
/// # Errors
///
/// - `404 Not Found`: no row for the id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteUserResponse>> {
    let id = parse_user_id(&id)?;

    if User::find_by_id(&state.db, id).await?.is_none() {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    User::delete(&state.db, id).await?;

    Ok(Json(DeleteUserResponse {
        message: "Deleted".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_with_all_fields_validates() {
        let payload = UserPayload::from_body(
            br#"{"name":"Paras","email":"paras@example.com","date":"2025-09-11"}"#,
        );

        let data = payload.into_new_user().unwrap();
        assert_eq!(data.name, "Paras");
        assert_eq!(data.email, "paras@example.com");
        assert_eq!(data.date, NaiveDate::from_ymd_opt(2025, 9, 11).unwrap());
    }

    #[test]
    fn test_payload_missing_field_is_rejected() {
        let payload =
            UserPayload::from_body(br#"{"name":"Paras","email":"paras@example.com"}"#);

        let err = payload.into_new_user().unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
        assert_eq!(err.to_string(), MISSING_FIELDS);
    }

    #[test]
    fn test_payload_empty_field_is_rejected() {
        let payload = UserPayload::from_body(
            br#"{"name":"","email":"paras@example.com","date":"2025-09-11"}"#,
        );

        let err = payload.into_new_user().unwrap_err();
        assert_eq!(err.to_string(), MISSING_FIELDS);
    }

    #[test]
    fn test_malformed_body_is_treated_as_empty() {
        let payload = UserPayload::from_body(b"not json at all");
        assert!(payload.name.is_none());
        assert!(payload.email.is_none());
        assert!(payload.date.is_none());

        let err = payload.into_new_user().unwrap_err();
        assert_eq!(err.to_string(), MISSING_FIELDS);
    }

    #[test]
    fn test_empty_body_is_treated_as_empty() {
        let payload = UserPayload::from_body(b"");
        let err = payload.into_new_user().unwrap_err();
        assert_eq!(err.to_string(), MISSING_FIELDS);
    }

    #[test]
    fn test_unparseable_date_is_rejected() {
        let payload = UserPayload::from_body(
            br#"{"name":"Paras","email":"paras@example.com","date":"September 11"}"#,
        );

        let err = payload.into_new_user().unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
        assert_eq!(err.to_string(), "date must be a valid YYYY-MM-DD date");
    }

    #[test]
    fn test_parse_user_id_accepts_integers() {
        assert_eq!(parse_user_id("42").unwrap(), 42);
    }

    #[test]
    fn test_parse_user_id_rejects_non_integers_as_not_found() {
        let err = parse_user_id("abc").unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.to_string(), "User not found");
    }
}
