//! Persistence boundary of the dashboard.
//!
//! Screens talk to the backend only through [`GymApi`]. Whether a save is a
//! create or an update is decided here, from the payload, so transports only
//! have to send the request they are given.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use shared::{
    Booking, Category, CategoryPayload, DataResponse, ListResponse, Result, Session, SessionPayload,
    Trainer,
};

pub const SESSIONS_PATH: &str = "/sessions";
pub const TRAINERS_PATH: &str = "/trainers";
pub const CATEGORIES_PATH: &str = "/categories";
pub const BOOKINGS_PATH: &str = "/bookings";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A validated session payload together with where and how to send it
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub method: Method,
    pub path: String,
    pub payload: SessionPayload,
}

impl SaveRequest {
    /// `PUT /sessions/{id}` when the payload carries an id, `POST /sessions` otherwise.
    pub fn for_payload(payload: SessionPayload) -> Self {
        match payload.id {
            Some(id) => Self {
                method: Method::Put,
                path: session_path(id),
                payload,
            },
            None => Self {
                method: Method::Post,
                path: SESSIONS_PATH.to_string(),
                payload,
            },
        }
    }

    pub fn is_update(&self) -> bool {
        self.method == Method::Put
    }
}

pub fn session_path(id: i64) -> String {
    format!("{}/{}", SESSIONS_PATH, id)
}

pub fn category_path(id: i64) -> String {
    format!("{}/{}", CATEGORIES_PATH, id)
}

pub fn trainer_path(id: i64) -> String {
    format!("{}/{}", TRAINERS_PATH, id)
}

/// Joins the configured base URL and an endpoint path.
pub fn api_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Decodes a list body, bare or wrapped in `data`.
pub fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>> {
    let response: ListResponse<T> = serde_json::from_str(body)?;
    Ok(response.into_items())
}

/// Decodes a `{ "data": ... }` record body.
pub fn decode_record<T: DeserializeOwned>(body: &str) -> Result<T> {
    let response: DataResponse<T> = serde_json::from_str(body)?;
    Ok(response.data)
}

#[async_trait]
pub trait GymApi: Send + Sync {
    async fn list_sessions(&self) -> Result<Vec<Session>>;
    async fn list_trainers(&self) -> Result<Vec<Trainer>>;
    /// `GET /trainers/{id}`; an unknown id is `SharedError::NotFound`.
    async fn get_trainer(&self, id: i64) -> Result<Trainer>;
    async fn list_categories(&self) -> Result<Vec<Category>>;
    /// `POST /categories`
    async fn create_category(&self, payload: &CategoryPayload) -> Result<()>;
    /// `DELETE /categories/{id}`
    async fn delete_category(&self, id: i64) -> Result<()>;
    async fn list_bookings(&self) -> Result<Vec<Booking>>;
    /// Sends the create or update and returns the session as stored.
    async fn save_session(&self, request: &SaveRequest) -> Result<Session>;
    async fn delete_session(&self, id: i64) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared::{SessionStatus, SharedError};

    fn payload(id: Option<i64>) -> SessionPayload {
        SessionPayload {
            id,
            name: "Yoga".to_string(),
            trainer_id: 1,
            category_id: 1,
            start_date: "2024-06-01 09:00:00".to_string(),
            end_date: "2024-06-01 10:00:00".to_string(),
            capacity: 10,
            status: SessionStatus::Upcoming,
        }
    }

    #[test]
    fn test_new_session_posts() {
        let request = SaveRequest::for_payload(payload(None));
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/sessions");
        assert!(!request.is_update());
    }

    #[test]
    fn test_existing_session_puts() {
        let request = SaveRequest::for_payload(payload(Some(42)));
        assert_eq!(request.method.as_str(), "PUT");
        assert_eq!(request.path, "/sessions/42");
        assert!(request.is_update());
    }

    #[test]
    fn test_resource_paths() {
        assert_eq!(category_path(3), "/categories/3");
        assert_eq!(trainer_path(12), "/trainers/12");
    }

    #[test]
    fn test_api_url_joins_slashes() {
        assert_eq!(api_url("http://gym/api/", "/sessions"), "http://gym/api/sessions");
        assert_eq!(api_url("http://gym/api", "trainers"), "http://gym/api/trainers");
    }

    #[test]
    fn test_decode_list_both_shapes() {
        let bare: Vec<Category> = decode_list(r#"[{"id": 1, "name": "Yoga"}]"#).unwrap();
        let wrapped: Vec<Category> = decode_list(r#"{"data": [{"id": 1, "name": "Yoga"}]}"#).unwrap();
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn test_decode_errors_become_conversion() {
        let result: Result<Vec<Category>> = decode_list(r#"{"items": []}"#);
        assert!(matches!(result, Err(SharedError::Conversion(_))));
    }

    #[test]
    fn test_decode_record() {
        let trainer: Trainer = decode_record(r#"{"data": {"id": 3, "name": "Lee"}}"#).unwrap();
        assert_eq!(trainer.name, "Lee");
    }
}
