pub mod build;
pub mod stats;
pub mod types;

pub use build::Concordance;
pub use types::*;
