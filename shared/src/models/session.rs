use crate::models::trainer::Trainer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a scheduled session
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionStatus::Upcoming => "upcoming",
            SessionStatus::Ongoing => "ongoing",
            SessionStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// A scheduled gym class occurrence as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Backend identifier
    pub id: i64,

    /// Session name, e.g. "Morning Yoga"
    pub name: String,

    pub trainer_id: i64,

    pub category_id: i64,

    /// Start timestamp, `YYYY-MM-DD HH:MM:SS`
    pub start_date: String,

    /// End timestamp, `YYYY-MM-DD HH:MM:SS`
    pub end_date: String,

    /// Maximum number of members
    pub capacity: u32,

    #[serde(default)]
    pub status: SessionStatus,

    /// Trainer name denormalised by the backend, may be missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer_name: Option<String>,

    /// Category name denormalised by the backend, may be missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,

    /// Embedded trainer record, when the backend includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer: Option<Trainer>,

    /// Members booked onto the session
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<serde_json::Value>,
}

impl Session {
    /// Number of members booked onto the session
    pub fn booked(&self) -> usize {
        self.members.len()
    }

    /// Booked share of capacity as a percentage, for the progress bar
    pub fn fill_percent(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.booked() as f64 * 100.0 / f64::from(self.capacity)
    }
}
