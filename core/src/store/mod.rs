pub mod assignment;
pub mod semester;

// Re-export
pub use assignment::{AssignmentStore, DateMarker, DotColor};
pub use semester::SemesterStore;
