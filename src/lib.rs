//! Handwriting flashcard trainer.
//!
//! [`crate::core`] holds the framework-free pieces: segmentation, ghost sizing,
//! drawing slots, the practice queue and the session controller that ties
//! them together. [`gui`] embeds them in an eframe window.

pub mod core;
pub mod deck;
pub mod gui;
pub mod persistence;
pub mod speech;

pub use crate::core::{
    Grade,
    PracticeQueue,
    SessionController,
    VocabularyRecord,
    XieziError,
};
