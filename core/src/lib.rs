pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod service;
pub mod store;
pub mod time;

pub use config::AppConfig;
pub use error::ValidationError;
pub use model::assignment::Assignment;
pub use model::semester::{Class, MeetingDay, Season, Semester};
pub use model::settings::{MotivationFrequency, ReminderFrequency, Settings};
pub use service::dto::{Seed, SeedSemester};
pub use service::planner::Planner;
pub use service::sort::{compare_semesters, filter_by_year, sort_semesters, YearFilter};
pub use store::{AssignmentStore, DateMarker, DotColor, SemesterStore};
