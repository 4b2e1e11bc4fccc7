use serde::{Deserialize, Serialize};
use std::fmt;

/// Membership state shown as a badge on the members screen
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    Expired,
    Pending,
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MemberStatus::Active => "Active",
            MemberStatus::Expired => "Expired",
            MemberStatus::Pending => "Pending",
        };
        f.write_str(label)
    }
}

/// A gym member
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub id: i64,

    /// Full name, first word is the first name
    pub name: String,

    pub email: String,

    pub phone: String,

    /// Plan name, capitalised ("Basic", "Premium")
    #[serde(default)]
    pub plan: String,

    #[serde(default)]
    pub status: MemberStatus,

    /// Join date as displayed, e.g. "Jan 15, 2024"
    #[serde(rename = "joinDate", default)]
    pub join_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Member {
    /// Whether the name or email contains `query`, ignoring case.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.email.to_lowercase().contains(&query)
    }
}

/// Splits a full name into the first word and the remainder.
pub fn split_full_name(full_name: &str) -> (String, String) {
    match full_name.split_once(' ') {
        Some((first, rest)) => (first.to_string(), rest.to_string()),
        None => (full_name.to_string(), String::new()),
    }
}

/// Initials of every word in a name, e.g. "Sarah Johnson" gives "SJ".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Members whose name or email contains `query`; an empty query keeps everyone.
pub fn filter_members<'a>(members: &'a [Member], query: &str) -> Vec<&'a Member> {
    members.iter().filter(|member| member.matches(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn member(id: i64, name: &str, email: &str) -> Member {
        Member {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: "+1 234 567 890".to_string(),
            plan: "Premium".to_string(),
            status: MemberStatus::Active,
            join_date: "Jan 15, 2024".to_string(),
            avatar: None,
        }
    }

    #[test]
    fn test_filter_by_name_and_email_case_insensitive() {
        let members = vec![
            member(1, "Sarah Johnson", "sarah.j@email.com"),
            member(2, "Michael Chen", "m.chen@email.com"),
            member(3, "Emma Wilson", "emma.w@EMAIL.com"),
        ];

        let by_name: Vec<i64> = filter_members(&members, "CHEN").iter().map(|m| m.id).collect();
        assert_eq!(by_name, vec![2]);

        let by_email: Vec<i64> = filter_members(&members, "emma.w@email").iter().map(|m| m.id).collect();
        assert_eq!(by_email, vec![3]);

        assert_eq!(filter_members(&members, "").len(), 3);
        assert!(filter_members(&members, "zzz").is_empty());
    }

    #[test]
    fn test_split_full_name() {
        assert_eq!(
            split_full_name("Mary Ann Smith"),
            ("Mary".to_string(), "Ann Smith".to_string())
        );
        assert_eq!(split_full_name("Cher"), ("Cher".to_string(), String::new()));
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("  "), "");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(MemberStatus::Expired.to_string(), "Expired");
        let status: MemberStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, MemberStatus::Pending);
    }
}
