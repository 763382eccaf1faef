//! Error type for database builders and option parsing.
//!
//! The integrity passes themselves never fail: absent references are ordinary
//! data, and unreadable media paths count as missing.
use crate::store::{FamilyId, PersonId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("No person with id {0}")]
    UnknownPerson(PersonId),
    #[error("No family with id {0}")]
    UnknownFamily(FamilyId),
    #[error("Invalid check options: {0}")]
    Config(String),
    #[error("Report serialization failed: {0}")]
    Report(String),
}
