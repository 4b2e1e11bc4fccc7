use crate::models::trainer::{TrainerProfile, TrainerStatus};
use chrono::Utc;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RATING: f64 = 4.5;

pub const SPECIALTY_OPTIONS: [&str; 16] = [
    "Strength Training",
    "HIIT",
    "CrossFit",
    "Yoga",
    "Pilates",
    "Meditation",
    "Cardio",
    "Boxing",
    "Weight Loss",
    "Zumba",
    "Dance Fitness",
    "Aerobics",
    "Personal Training",
    "Nutrition",
    "Spinning",
    "Endurance",
];

pub const STOCK_AVATARS: [&str; 3] = [
    "https://images.unsplash.com/photo-1570295999919-56ceb5ecca61?w=100&h=100&fit=crop",
    "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=100&h=100&fit=crop",
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop",
];

/// Add/edit trainer dialog
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrainerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialties: Vec<String>,
    pub status: TrainerStatus,
}

impl TrainerForm {
    pub fn open(editing: Option<&TrainerProfile>) -> Self {
        match editing {
            Some(trainer) => Self {
                name: trainer.name.clone(),
                email: trainer.email.clone(),
                phone: trainer.phone.clone(),
                specialties: trainer.specialties.clone(),
                status: trainer.status,
            },
            None => Self::default(),
        }
    }

    /// Adds a specialty unless it is already listed.
    pub fn add_specialty(&mut self, specialty: &str) {
        if !self.specialties.iter().any(|s| s == specialty) {
            self.specialties.push(specialty.to_string());
        }
    }

    pub fn remove_specialty(&mut self, specialty: &str) {
        self.specialties.retain(|s| s != specialty);
    }

    /// Options still offered in the specialty picker
    pub fn available_specialties(&self) -> Vec<&'static str> {
        SPECIALTY_OPTIONS
            .iter()
            .copied()
            .filter(|option| !self.specialties.iter().any(|s| s == option))
            .collect()
    }

    /// Builds the trainer record to save.
    ///
    /// Editing keeps the id, avatar, session count and a non-zero rating.
    /// New trainers get a time-based id, the default rating and a stock avatar.
    pub fn into_trainer(self, editing: Option<&TrainerProfile>) -> TrainerProfile {
        let id = editing
            .map(|t| t.id)
            .filter(|id| *id != 0)
            .unwrap_or_else(|| Utc::now().timestamp_millis());

        TrainerProfile {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            specialties: self.specialties,
            rating: editing
                .map(|t| t.rating)
                .filter(|r| *r > 0.0)
                .unwrap_or(DEFAULT_RATING),
            sessions: editing.map(|t| t.sessions).unwrap_or(0),
            status: self.status,
            avatar: editing
                .map(|t| t.avatar.clone())
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| stock_avatar(id).to_string()),
        }
    }
}

fn stock_avatar(id: i64) -> &'static str {
    STOCK_AVATARS[id.rem_euclid(STOCK_AVATARS.len() as i64) as usize]
}
