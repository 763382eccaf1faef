//! Check-and-repair engine for the genealogical database.
//!
//! `ConsistencyChecker` runs a fixed set of passes over a `Database`: it drops
//! children from families that do not own them, reports media objects whose
//! files are missing, reconciles relationship labels with the parents' genders,
//! and deletes families that have neither parent. Findings come back as a
//! `CheckReport`; rendering them is left to the caller.

pub use self::checker::ConsistencyChecker;
pub use self::probe::{FileProbe, FsProbe};
pub use self::report::{BrokenLink, CheckReport, MissingMedia, RelationshipFix};

// --- MODULE DECLARATIONS ---
mod checker;
mod probe;
mod report;
mod rules {
    pub mod empty_families;
    pub mod family_links;
    pub mod media;
    pub mod parents;
}
