pub mod models {
    pub mod booking;
    pub mod category;
    pub mod member;
    pub mod session;
    pub mod trainer;
}

pub mod dto {
    pub mod auth;
    pub mod category;
    pub mod common;
    pub mod member;
    pub mod session;
    pub mod subscription;
    pub mod trainer;
}

pub mod error;
pub mod session_window;

// Re-export commonly used items
pub use error::{SharedError, Result};

// Re-export models
pub use models::{
    booking::{Attendance, Booking},
    category::Category,
    member::{Member, MemberStatus},
    session::{Session, SessionStatus},
    trainer::{Trainer, TrainerAddress, TrainerProfile, TrainerStatus},
};

// Re-export DTOs
pub use dto::{
    auth::{LoginForm, PasswordChangeForm, PasswordStrength, ProfileForm, ProfileUpdate, RegisterForm},
    category::{CategoryForm, CategoryPayload},
    common::{DataResponse, ErrorResponse, FormCheck, ListResponse},
    member::MemberForm,
    session::{SessionForm, SessionPayload},
    subscription::SubscriptionForm,
    trainer::TrainerForm,
};

pub use session_window::{SessionTimeInput, SessionTimeWindow};
