use serde::{Deserialize, Serialize};

/// A class category such as Yoga or Cardio
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}
