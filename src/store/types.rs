use serde::{Serialize, Deserialize};
use smallvec::SmallVec;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct PersonId(pub u32);

impl PersonId {
    #[inline(always)]
    pub fn index(&self) -> usize { self.0 as usize }
    pub fn new(idx: usize) -> Self { Self(idx as u32) }
    /// Checked conversion for indices coming from outside the crate.
    pub fn from_index(idx: usize) -> Option<Self> { u32::try_from(idx).ok().map(Self) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct FamilyId(pub u32);

impl FamilyId {
    #[inline(always)]
    pub fn index(&self) -> usize { self.0 as usize }
    pub fn new(idx: usize) -> Self { Self(idx as u32) }
    /// Checked conversion for indices coming from outside the crate.
    pub fn from_index(idx: usize) -> Option<Self> { u32::try_from(idx).ok().map(Self) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct MediaId(pub u32);

impl MediaId {
    #[inline(always)]
    pub fn index(&self) -> usize { self.0 as usize }
    pub fn new(idx: usize) -> Self { Self(idx as u32) }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "I{}", self.0) }
}

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "F{}", self.0) }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "O{}", self.0) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Gender {
    /// Lenient parse: anything that is not recognisably male or female is `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Gender::Male,
            "female" | "f" => Gender::Female,
            _ => Gender::Unknown,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Name {
    pub first_name: String,
    pub surname: String,
    pub suffix: Option<String>,
}

impl Name {
    pub fn new(first_name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self { first_name: first_name.into(), surname: surname.into(), suffix: None }
    }

    /// "Surname, First" with the suffix after the given name when present.
    pub fn display(&self) -> String {
        match &self.suffix {
            Some(suffix) => format!("{}, {} {}", self.surname, self.first_name, suffix),
            None => format!("{}, {}", self.surname, self.first_name),
        }
    }
}

/// Membership in a family other than the main one (adoption, step-family, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AltFamily {
    pub family: FamilyId,
    pub relation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub gender: Gender,
    pub primary_name: Name,
    /// The family in which the person is a child by birth.
    pub main_family: Option<FamilyId>,
    pub alt_families: SmallVec<[AltFamily; 2]>,
}

impl Person {
    pub fn new(primary_name: Name, gender: Gender) -> Self {
        Self { gender, primary_name, ..Default::default() }
    }

    pub fn has_alt_family(&self, family: FamilyId) -> bool {
        self.alt_families.iter().any(|alt| alt.family == family)
    }

    /// True if the person claims `family` either as main or as alternate family.
    pub fn belongs_to(&self, family: FamilyId) -> bool {
        self.main_family == Some(family) || self.has_alt_family(family)
    }

    /// Drops every association with `family`. Returns whether anything was removed.
    pub fn remove_alt_family(&mut self, family: FamilyId) -> bool {
        let before = self.alt_families.len();
        self.alt_families.retain(|alt| alt.family != family);
        self.alt_families.len() != before
    }
}

/// Free-form family relationship label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship(pub String);

impl Relationship {
    pub const PARTNERS: &'static str = "Partners";
    pub const UNKNOWN: &'static str = "Unknown";

    pub fn new(label: impl Into<String>) -> Self { Self(label.into()) }
    pub fn partners() -> Self { Self(Self::PARTNERS.to_string()) }
    pub fn unknown() -> Self { Self(Self::UNKNOWN.to_string()) }

    pub fn is_partners(&self) -> bool { self.0 == Self::PARTNERS }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl Default for Relationship {
    fn default() -> Self { Self::unknown() }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Family {
    pub father: Option<PersonId>,
    pub mother: Option<PersonId>,
    pub relationship: Relationship,
    pub children: Vec<PersonId>,
}

impl Family {
    pub fn new(father: Option<PersonId>, mother: Option<PersonId>, relationship: Relationship) -> Self {
        Self { father, mother, relationship, children: Vec::new() }
    }

    /// A family with neither father nor mother.
    pub fn is_empty(&self) -> bool { self.father.is_none() && self.mother.is_none() }

    pub fn swap_parents(&mut self) {
        std::mem::swap(&mut self.father, &mut self.mother);
    }

    /// Removes every occurrence of `person` from the child list.
    pub fn remove_child(&mut self, person: PersonId) -> bool {
        let before = self.children.len();
        self.children.retain(|&c| c != person);
        self.children.len() != before
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaObject {
    pub path: PathBuf,
    pub description: String,
}

impl MediaObject {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), description: String::new() }
    }
}
