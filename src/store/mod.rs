//! Arena storage for people, families and media objects.
pub mod registry;
pub mod types;

pub use registry::Database;
pub use types::{
    AltFamily, Family, FamilyId, Gender, MediaId, MediaObject, Name, Person, PersonId, Relationship,
};
