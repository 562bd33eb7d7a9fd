//! Vocabulary lists, review session state and the quiz engine
//!
//! This module provides:
//! - Word list persistence (one JSON file per named list)
//! - Review queue management (set algebra over word lists)
//! - A multiple-choice quiz engine with distractor selection
//! - Study counters persisted across sessions

pub mod models;
pub mod quiz;
pub mod session;
pub mod storage;

pub use models::WordList;
pub use quiz::{Question, Quiz};
pub use session::Session;
pub use storage::{VocabStorage, VocabStorageError, REVIEW_LIST};
