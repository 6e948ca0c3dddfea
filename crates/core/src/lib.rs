//! Domain types and pure logic for the language tandem backend.
//!
//! Nothing in this crate performs I/O: record types, scoring tables, the
//! streak state machine, achievement thresholds, prompt templates and LLM
//! reply parsing all live here so the storage, engine and API crates share
//! one definition.

pub mod achievements;
pub mod clock;
pub mod cultural;
pub mod error;
pub mod exercise;
pub mod generation;
pub mod language;
pub mod progress;
pub mod prompts;
pub mod scoring;
pub mod streak;
pub mod types;
pub mod user;
