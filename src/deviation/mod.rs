pub mod analyzer;
pub mod types;

pub use analyzer::{DeviationAnalyzer, relative_deviation};
pub use types::DeviationResult;
