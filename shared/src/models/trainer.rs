use serde::{Deserialize, Serialize};
use std::fmt;

/// A trainer as returned by `/trainers`. Only `id` and `name` are
/// guaranteed; the detail endpoint fills in the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Trainer {
    pub id: i64,

    pub name: String,

    /// Photo URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    /// Free text, e.g. "Yoga, Pilates"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialties: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<TrainerAddress>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrainerAddress {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl TrainerAddress {
    /// "street city", with missing parts left blank
    pub fn line(&self) -> String {
        format!(
            "{} {}",
            self.street.as_deref().unwrap_or(""),
            self.city.as_deref().unwrap_or("")
        )
    }
}

impl Trainer {
    /// Labelled detail rows for the trainer page, skipping empty values.
    pub fn detail_rows(&self) -> Vec<(&'static str, String)> {
        let candidates = [
            ("Gender", self.gender.clone()),
            ("Birth Date", self.date_of_birth.clone()),
            ("Hire Date", self.hire_date.clone()),
            ("Status", self.status.clone()),
            ("Specialties", self.specialties.clone()),
            ("Address", self.address.as_ref().map(TrainerAddress::line)),
        ];

        candidates
            .into_iter()
            .filter_map(|(label, value)| value.filter(|v| !v.is_empty()).map(|v| (label, v)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrainerStatus {
    #[default]
    Active,
    Inactive,
}

impl fmt::Display for TrainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainerStatus::Active => write!(f, "active"),
            TrainerStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// Roster card for a trainer, as edited through the trainer dialog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainerProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialties: Vec<String>,
    pub rating: f64,
    pub sessions: u32,
    pub status: TrainerStatus,
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_entry_needs_only_id_and_name() {
        let trainer: Trainer = serde_json::from_str(r#"{"id": 4, "name": "Lee"}"#).unwrap();
        assert_eq!(trainer, Trainer { id: 4, name: "Lee".to_string(), ..Trainer::default() });
        assert!(trainer.detail_rows().is_empty());
    }

    #[test]
    fn test_detail_rows_skip_blank_values() {
        let json = r#"{
            "id": 4,
            "name": "Lee",
            "email": "lee@gym.io",
            "gender": "female",
            "hire_date": "",
            "specialties": "Yoga, Pilates",
            "address": {"city": "Cairo"}
        }"#;
        let trainer: Trainer = serde_json::from_str(json).unwrap();
        assert_eq!(
            trainer.detail_rows(),
            vec![
                ("Gender", "female".to_string()),
                ("Specialties", "Yoga, Pilates".to_string()),
                ("Address", " Cairo".to_string()),
            ]
        );
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&TrainerStatus::Inactive).unwrap(), "\"inactive\"");
        assert_eq!(TrainerStatus::default().to_string(), "active");
    }
}
