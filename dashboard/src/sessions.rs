use crate::api::{GymApi, SaveRequest};
use crate::notice::Notice;
use chrono::NaiveDate;
use log::{error, info, warn};
use serde::Serialize;
use shared::session_window::today;
use shared::{Category, Result, Session, SessionForm, SessionStatus, SharedError, Trainer};

pub const NO_TRAINER: &str = "No trainer";
pub const NO_CATEGORY: &str = "No category";

/// One line of the sessions list, with display fallbacks applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRow {
    pub id: i64,
    pub name: String,
    pub trainer_name: String,
    pub trainer_photo: Option<String>,
    pub category_name: String,
    pub start_date: String,
    pub end_date: String,
    pub booked: usize,
    pub capacity: u32,
    pub fill_percent: f64,
    pub status: SessionStatus,
}

impl From<&Session> for SessionRow {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id,
            name: session.name.clone(),
            trainer_name: non_blank(session.trainer_name.as_deref()).unwrap_or(NO_TRAINER).to_string(),
            trainer_photo: session.trainer.as_ref().and_then(|t| t.photo.clone()),
            category_name: non_blank(session.category_name.as_deref()).unwrap_or(NO_CATEGORY).to_string(),
            start_date: session.start_date.clone(),
            end_date: session.end_date.clone(),
            booked: session.booked(),
            capacity: session.capacity,
            fill_percent: session.fill_percent(),
            status: session.status,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// State behind the sessions screen: the lists, and which session is being
/// edited or deleted.
pub struct SessionsScreen<A: GymApi> {
    api: A,
    sessions: Vec<Session>,
    trainers: Vec<Trainer>,
    categories: Vec<Category>,
    editing: Option<Session>,
    deleting: Option<Session>,
    form_open: bool,
}

impl<A: GymApi> SessionsScreen<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            sessions: Vec::new(),
            trainers: Vec::new(),
            categories: Vec::new(),
            editing: None,
            deleting: None,
            form_open: false,
        }
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn rows(&self) -> Vec<SessionRow> {
        self.sessions.iter().map(SessionRow::from).collect()
    }

    pub fn trainers(&self) -> &[Trainer] {
        &self.trainers
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn editing(&self) -> Option<&Session> {
        self.editing.as_ref()
    }

    pub fn deleting(&self) -> Option<&Session> {
        self.deleting.as_ref()
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// Fetches sessions, trainers and categories.
    ///
    /// Trainer and category failures leave those lists empty; only a session
    /// failure is reported.
    pub async fn load(&mut self) -> Option<Notice> {
        self.trainers = self.api.list_trainers().await.unwrap_or_else(|e| {
            warn!("Failed to fetch trainers: {}", e);
            Vec::new()
        });
        self.categories = self.api.list_categories().await.unwrap_or_else(|e| {
            warn!("Failed to fetch categories: {}", e);
            Vec::new()
        });

        match self.api.list_sessions().await {
            Ok(sessions) => {
                info!("Loaded {} sessions", sessions.len());
                self.sessions = sessions;
                None
            }
            Err(e) => {
                error!("Failed to fetch sessions: {}", e);
                Some(Notice::error("Error", "Failed to fetch sessions."))
            }
        }
    }

    /// Opens the dialog for a new session.
    pub fn open_create(&mut self) -> SessionForm {
        self.editing = None;
        self.form_open = true;
        SessionForm::blank(&self.trainers, &self.categories)
    }

    /// Opens the dialog prefilled with an existing session.
    pub fn open_edit(&mut self, id: i64) -> Result<SessionForm> {
        let session = self.find(id)?.clone();
        let form = SessionForm::from_session(&session);
        self.editing = Some(session);
        self.form_open = true;
        Ok(form)
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
        self.editing = None;
    }

    /// Validates and saves the dialog contents.
    ///
    /// The dialog stays open on any failure so the user can correct it.
    pub async fn submit(&mut self, form: &SessionForm) -> Notice {
        self.submit_on(form, today()).await
    }

    pub async fn submit_on(&mut self, form: &SessionForm, today: NaiveDate) -> Notice {
        let payload = match form.build_payload_on(self.editing.as_ref(), today) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Session form rejected: {}", e);
                return Notice::error("Invalid session", e.to_string());
            }
        };

        let request = SaveRequest::for_payload(payload);
        let saved = match self.api.save_session(&request).await {
            Ok(saved) => saved,
            Err(e) => {
                error!("Failed to save session '{}': {}", request.payload.name, e);
                return Notice::error("Error", "Failed to save session.");
            }
        };

        let notice = if request.is_update() {
            match self.sessions.iter_mut().find(|s| Some(s.id) == request.payload.id) {
                Some(slot) => *slot = saved,
                None => {
                    warn!("Updated session {} is no longer listed; appending it", saved.id);
                    self.sessions.push(saved);
                }
            }
            Notice::success("Updated", format!("{} updated successfully.", request.payload.name))
        } else {
            self.sessions.push(saved);
            Notice::success("Created", format!("{} created successfully.", request.payload.name))
        };

        self.close_form();
        notice
    }

    /// Marks a session for deletion pending confirmation.
    pub fn request_delete(&mut self, id: i64) -> Result<()> {
        self.deleting = Some(self.find(id)?.clone());
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.deleting = None;
    }

    /// Deletes the session marked by [`SessionsScreen::request_delete`].
    pub async fn confirm_delete(&mut self) -> Option<Notice> {
        let target = self.deleting.as_ref()?;
        let (id, name) = (target.id, target.name.clone());

        match self.api.delete_session(id).await {
            Ok(()) => {
                self.sessions.retain(|s| s.id != id);
                self.deleting = None;
                info!("Deleted session {} ({})", id, name);
                Some(Notice::success("Deleted", format!("{} deleted.", name)))
            }
            Err(e) => {
                error!("Failed to delete session {}: {}", id, e);
                Some(Notice::error("Error", "Failed to delete session."))
            }
        }
    }

    fn find(&self, id: i64) -> Result<&Session> {
        self.sessions
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| SharedError::NotFound(format!("session {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session() -> Session {
        Session {
            id: 1,
            name: "Spin".to_string(),
            trainer_id: 2,
            category_id: 3,
            start_date: "2024-06-01 18:00:00".to_string(),
            end_date: "2024-06-01 19:00:00".to_string(),
            capacity: 4,
            status: SessionStatus::Upcoming,
            trainer_name: Some(String::new()),
            category_name: None,
            trainer: Some(Trainer {
                id: 2,
                name: "Lee".to_string(),
                photo: Some("https://img/lee.png".to_string()),
                ..Trainer::default()
            }),
            members: vec![serde_json::json!({"id": 9})],
        }
    }

    #[test]
    fn test_row_fallbacks() {
        let row = SessionRow::from(&session());
        assert_eq!(row.trainer_name, NO_TRAINER);
        assert_eq!(row.category_name, NO_CATEGORY);
        assert_eq!(row.trainer_photo.as_deref(), Some("https://img/lee.png"));
        assert_eq!(row.booked, 1);
        assert_eq!(row.fill_percent, 25.0);
    }

    #[test]
    fn test_row_keeps_backend_names() {
        let mut s = session();
        s.trainer_name = Some("Lee".to_string());
        s.category_name = Some("Cardio".to_string());
        let row = SessionRow::from(&s);
        assert_eq!(row.trainer_name, "Lee");
        assert_eq!(row.category_name, "Cardio");
    }
}
