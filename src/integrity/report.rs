//! Findings accumulated by a check run.
use crate::error::CheckError;
use crate::store::{FamilyId, MediaId, PersonId, Relationship};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A child listed by a family that does not claim the family itself.
/// The child has already been removed from the family's child list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrokenLink {
    pub child: PersonId,
    pub family: FamilyId,
}

/// A relabel and/or father-mother swap made by the parent-gender pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipFix {
    pub family: FamilyId,
    pub before: Relationship,
    pub after: Relationship,
    pub swapped: bool,
}

/// A media object whose file could not be found. Reported only, never repaired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingMedia {
    pub media: MediaId,
    pub path: PathBuf,
}

/// The structured outcome of a check run, handed to whoever renders it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub broken_links: Vec<BrokenLink>,
    /// Ids of the families that were deleted; the records themselves are gone.
    pub empty_families: Vec<FamilyId>,
    pub relationship_fixes: Vec<RelationshipFix>,
    pub missing_media: Vec<MissingMedia>,
    /// Whether the run changed the database.
    pub modified: bool,
}

impl CheckReport {
    pub fn error_count(&self) -> usize {
        self.broken_links.len()
            + self.empty_families.len()
            + self.relationship_fixes.len()
            + self.missing_media.len()
    }

    pub fn is_clean(&self) -> bool { self.error_count() == 0 }

    pub fn to_json(&self) -> Result<String, CheckError> {
        serde_json::to_string_pretty(self).map_err(|e| CheckError::Report(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut report = CheckReport::default();
        assert!(report.is_clean());

        report.broken_links.push(BrokenLink { child: PersonId(1), family: FamilyId(2) });
        report.empty_families.push(FamilyId(3));
        report.missing_media.push(MissingMedia { media: MediaId(0), path: "/x.jpg".into() });
        assert_eq!(report.error_count(), 3);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_json_shape() {
        let report = CheckReport {
            relationship_fixes: vec![RelationshipFix {
                family: FamilyId(4),
                before: Relationship::unknown(),
                after: Relationship::partners(),
                swapped: false,
            }],
            modified: true,
            ..Default::default()
        };
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["relationship_fixes"][0]["family"], 4);
        assert_eq!(value["relationship_fixes"][0]["after"], "Partners");
        assert_eq!(value["modified"], true);
    }
}
