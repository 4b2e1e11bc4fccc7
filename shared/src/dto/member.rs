use crate::models::member::{split_full_name, Member, MemberStatus};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PLAN: &str = "basic";

/// Add/edit member dialog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Lowercase plan key, e.g. "basic"
    pub plan: String,
}

impl Default for MemberForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            plan: DEFAULT_PLAN.to_string(),
        }
    }
}

impl MemberForm {
    pub fn open(editing: Option<&Member>) -> Self {
        match editing {
            Some(member) => {
                let (first_name, last_name) = split_full_name(&member.name);
                Self {
                    first_name,
                    last_name,
                    email: member.email.clone(),
                    phone: member.phone.clone(),
                    plan: member.plan.to_lowercase(),
                }
            }
            None => Self::default(),
        }
    }

    /// Builds the member record to save. New members get a provisional id
    /// from the current time and today's join date.
    pub fn into_member(self, editing: Option<&Member>, today: NaiveDate) -> Member {
        Member {
            id: editing
                .map(|m| m.id)
                .unwrap_or_else(|| Utc::now().timestamp_millis()),
            name: format!("{} {}", self.first_name, self.last_name),
            email: self.email,
            phone: self.phone,
            plan: capitalize(&self.plan),
            status: editing.map(|m| m.status).unwrap_or(MemberStatus::Active),
            join_date: editing
                .map(|m| m.join_date.clone())
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| today.format("%b %-d, %Y").to_string()),
            avatar: editing.and_then(|m| m.avatar.clone()),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
