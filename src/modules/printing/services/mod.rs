pub mod amount_in_words;
pub mod document_builder;

pub use amount_in_words::{amount_in_words, number_to_words};
pub use document_builder::format_weight;
