use crate::api::GymApi;
use log::{info, warn};
use shared::Trainer;

/// What the trainer page shows
#[derive(Debug, Clone, PartialEq)]
pub enum TrainerDetails {
    /// The route id is missing, zero or not a number
    Invalid,
    NotFound,
    Loaded(Trainer),
}

impl TrainerDetails {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            TrainerDetails::Invalid => Some("Invalid trainer"),
            TrainerDetails::NotFound => Some("Trainer not found"),
            TrainerDetails::Loaded(_) => None,
        }
    }
}

/// Parses the `:id` route segment; zero counts as no id.
pub fn parse_trainer_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id != 0)
}

/// Trainer details page
pub struct TrainerDetailsScreen<A: GymApi> {
    api: A,
    details: Option<TrainerDetails>,
}

impl<A: GymApi> TrainerDetailsScreen<A> {
    pub fn new(api: A) -> Self {
        Self { api, details: None }
    }

    /// `None` while nothing has been loaded yet
    pub fn details(&self) -> Option<&TrainerDetails> {
        self.details.as_ref()
    }

    pub async fn load(&mut self, raw_id: &str) -> &TrainerDetails {
        let details = match parse_trainer_id(raw_id) {
            None => TrainerDetails::Invalid,
            Some(id) => match self.api.get_trainer(id).await {
                Ok(trainer) => {
                    info!("Loaded trainer {}", id);
                    TrainerDetails::Loaded(trainer)
                }
                Err(e) => {
                    warn!("Failed to fetch trainer {}: {}", id, e);
                    TrainerDetails::NotFound
                }
            },
        };
        self.details.insert(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_trainer_id() {
        assert_eq!(parse_trainer_id("12"), Some(12));
        assert_eq!(parse_trainer_id(" 7 "), Some(7));
        assert_eq!(parse_trainer_id("0"), None);
        assert_eq!(parse_trainer_id(""), None);
        assert_eq!(parse_trainer_id("abc"), None);
    }

    #[test]
    fn test_messages() {
        assert_eq!(TrainerDetails::Invalid.message(), Some("Invalid trainer"));
        assert_eq!(TrainerDetails::NotFound.message(), Some("Trainer not found"));
        assert_eq!(TrainerDetails::Loaded(Trainer::default()).message(), None);
    }
}
