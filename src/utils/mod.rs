//! Utility functions shared across the crate.
//!
//! - [`tokenizer`] - whitespace splitting and word normalization
//!
//! ```no_run
//! use concord::utils::{normalize_word, tokenize};
//!
//! let tokens: Vec<String> = tokenize("It is a truth universally acknowledged,").collect();
//! // Returns: ["it", "is", "a", "truth", "universally", "acknowledged"]
//!
//! let word = normalize_word("Wife.");
//! // Returns: "wife"
//! ```

pub mod tokenizer;

pub use tokenizer::*;
