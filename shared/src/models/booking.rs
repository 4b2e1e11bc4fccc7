use serde::{Deserialize, Serialize};

/// Member summary embedded in a booking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingMember {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Trainer summary embedded in a booked session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingTrainer {
    pub name: String,
}

/// Session summary embedded in a booking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingSession {
    pub name: String,
    pub trainer: BookingTrainer,
}

/// A member's booking onto a session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: i64,

    pub member: BookingMember,

    pub session: BookingSession,

    /// `YYYY-MM-DD HH:MM:SS`
    pub booking_date: String,

    /// `None` until the member is checked in or marked missed
    #[serde(default)]
    pub is_attended: Option<bool>,
}

/// Attendance outcome of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attendance {
    Attended,
    Missed,
    Pending,
}

impl Attendance {
    pub fn from_flag(is_attended: Option<bool>) -> Self {
        match is_attended {
            Some(true) => Attendance::Attended,
            Some(false) => Attendance::Missed,
            None => Attendance::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Attendance::Attended => "Attended",
            Attendance::Missed => "Missed",
            Attendance::Pending => "Pending",
        }
    }

    /// Badge variant shared with the member status badge
    pub fn badge(&self) -> &'static str {
        match self {
            Attendance::Attended => "active",
            Attendance::Missed => "expired",
            Attendance::Pending => "pending",
        }
    }
}

impl Booking {
    pub fn attendance(&self) -> Attendance {
        Attendance::from_flag(self.is_attended)
    }

    /// Only bookings without an outcome can be checked in or cancelled.
    pub fn is_actionable(&self) -> bool {
        self.is_attended.is_none()
    }

    /// Date half of `booking_date`
    pub fn booking_day(&self) -> &str {
        self.booking_date.split(' ').next().unwrap_or_default()
    }

    /// Time half of `booking_date`, empty when absent
    pub fn booking_time(&self) -> &str {
        self.booking_date.split(' ').nth(1).unwrap_or_default()
    }
}
