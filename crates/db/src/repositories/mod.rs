//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&dyn RecordStore` as the first argument.

pub mod cultural_repo;
pub mod exercise_repo;
pub mod progress_repo;
pub mod user_repo;

pub use cultural_repo::CulturalRepo;
pub use exercise_repo::ExerciseRepo;
pub use progress_repo::ProgressRepo;
pub use user_repo::UserRepo;
