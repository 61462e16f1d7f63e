//! Natural Language Processing components
//!
//! This module provides sentence segmentation and word-level tokenization.

pub mod segmenter;
pub mod tokenizer;

pub use segmenter::segment;
pub use tokenizer::{excerpt, word_tokens};
