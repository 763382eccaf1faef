//! Text rendering of check results.
pub mod summary;

pub use summary::format_summary;
