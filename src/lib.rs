//! # Concord - Plain-Text Concordance
//!
//! Concord builds a concordance of a plain-text file in a single pass:
//! every word is normalized (lowercased, stripped to ASCII letters and
//! apostrophes), counted, and indexed against the lines it occurs in.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Concordance construction, lookup, and statistics
//! - [`interactive`] - Interactive lookup prompt
//! - [`output`] - Result formatting (colored terminal output)
//! - [`utils`] - Tokenization and word normalization
//!
//! ## Quick Start
//!
//! ```no_run
//! use concord::index::Concordance;
//! use std::path::Path;
//!
//! // Build a concordance from a text file
//! let concordance = Concordance::from_path(Path::new("pp_ch1.txt")).unwrap();
//!
//! // Look up a word; a miss carries the normalized form searched for
//! match concordance.lookup("Wife") {
//!     Ok(result) => {
//!         println!("{} ({})", result.word, result.count);
//!         for line in &result.contexts {
//!             println!("{}", line);
//!         }
//!     }
//!     Err(missing) => println!("no entry for {:?}", missing.word),
//! }
//! ```
//!
//! The index is immutable once built: lookups never mutate it, so shared
//! references can be handed to as many readers as needed.

pub mod index;
pub mod interactive;
pub mod output;
pub mod utils;
