pub mod api;
pub mod bookings;
pub mod categories;
pub mod config;
pub mod logging;
pub mod members;
pub mod notice;
pub mod sessions;
pub mod trainers;

pub use api::{GymApi, Method, SaveRequest};
pub use bookings::BookingsScreen;
pub use categories::CategoriesScreen;
pub use config::{Config, Environment};
pub use members::MembersScreen;
pub use notice::{Notice, NoticeKind};
pub use sessions::{SessionRow, SessionsScreen};
pub use trainers::{TrainerDetails, TrainerDetailsScreen};
