use crate::error::Result;
use crate::models::category::Category;
use crate::models::session::{Session, SessionStatus};
use crate::models::trainer::Trainer;
use crate::session_window::{
    extract_time_of_day, today, validate_and_build_on, SessionTimeInput, DEFAULT_CAPACITY,
    DEFAULT_END_TIME, DEFAULT_START_TIME,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Editable state of the create/edit session dialog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionForm {
    pub name: String,
    pub trainer_id: i64,
    pub category_id: i64,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
    /// Capacity as typed, clamped on submit
    pub capacity: i64,
}

impl SessionForm {
    /// Form for a new session, preselecting the first trainer and category.
    pub fn blank(trainers: &[Trainer], categories: &[Category]) -> Self {
        Self {
            name: String::new(),
            trainer_id: trainers.first().map(|t| t.id).unwrap_or(0),
            category_id: categories.first().map(|c| c.id).unwrap_or(0),
            start_time: DEFAULT_START_TIME.to_string(),
            end_time: DEFAULT_END_TIME.to_string(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Form prefilled from a stored session.
    pub fn from_session(session: &Session) -> Self {
        Self {
            name: session.name.clone(),
            trainer_id: session.trainer_id,
            category_id: session.category_id,
            start_time: extract_time_of_day(Some(&session.start_date)),
            end_time: extract_time_of_day(Some(&session.end_date)),
            capacity: i64::from(session.capacity),
        }
    }

    /// Blank form or prefilled form depending on whether a session is being edited.
    pub fn open(editing: Option<&Session>, trainers: &[Trainer], categories: &[Category]) -> Self {
        match editing {
            Some(session) => Self::from_session(session),
            None => Self::blank(trainers, categories),
        }
    }

    pub fn time_input(&self) -> SessionTimeInput {
        SessionTimeInput {
            name: self.name.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            capacity_raw: self.capacity,
        }
    }

    /// Validates the form and builds the payload for the save collaborator.
    pub fn build_payload(&self, editing: Option<&Session>) -> Result<SessionPayload> {
        self.build_payload_on(editing, today())
    }

    /// Same as [`SessionForm::build_payload`] with today's date supplied.
    pub fn build_payload_on(&self, editing: Option<&Session>, today: NaiveDate) -> Result<SessionPayload> {
        let prior_start = editing.map(|s| s.start_date.as_str());
        let window = validate_and_build_on(&self.time_input(), prior_start, today)?;

        Ok(SessionPayload {
            id: editing.map(|s| s.id),
            name: self.name.clone(),
            trainer_id: self.trainer_id,
            category_id: self.category_id,
            start_date: window.start_date_time,
            end_date: window.end_date_time,
            capacity: window.capacity,
            status: editing.map(|s| s.status).unwrap_or_default(),
        })
    }
}

/// Body sent to the backend when creating or updating a session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionPayload {
    /// Present when updating an existing session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub trainer_id: i64,
    pub category_id: i64,
    /// `YYYY-MM-DD HH:MM:00`
    pub start_date: String,
    /// `YYYY-MM-DD HH:MM:00`
    pub end_date: String,
    pub capacity: u32,
    pub status: SessionStatus,
}
