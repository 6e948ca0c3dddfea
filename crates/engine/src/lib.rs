//! Domain services: progress tracking, the exercise catalog and the
//! cultural content catalog.
//!
//! Services hold their collaborators (store, clock, LLM client) behind
//! `Arc`s and are cheap to share across request handlers.

pub mod cultural;
pub mod error;
pub mod exercises;
pub mod locks;
pub mod progress;

pub use cultural::CulturalCatalog;
pub use error::EngineError;
pub use exercises::ExerciseCatalog;
pub use locks::UserLocks;
pub use progress::ProgressEngine;
