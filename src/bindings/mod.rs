//! Python facade over the database, the integrity checker and the filters.
pub mod python;
