//! Vocabulary decks: CSV files on disk and the built-in sample.

mod parser;
mod sample;

pub use parser::{
    load_csv,
    parse_csv,
};
pub use sample::sample_deck;
