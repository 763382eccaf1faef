//! Person filters.
pub mod soundex;

pub use soundex::{soundex, SoundexFilter};
