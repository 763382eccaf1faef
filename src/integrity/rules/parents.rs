//! Consistency between a family's relationship label and its parents' genders.

use crate::integrity::report::RelationshipFix;
use crate::store::{Database, FamilyId, Gender, Relationship};

/// What the parent-gender rule wants done to one family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Correction {
    pub relabel: Option<Relationship>,
    pub swap: bool,
}

/// Decides the correction for a family with both parents present.
///
/// - A non-"Partners" family whose parents share a gender becomes "Partners".
/// - A non-"Partners" family whose parents are anything other than a male
///   father and a female mother has its parents swapped.
/// - A "Partners" family whose parents differ in gender becomes "Unknown", and
///   is swapped as well only when the father is female.
///
/// When one parent's gender is unknown the swap is its own inverse, so the
/// family is swapped again on every run.
pub(crate) fn correction(relationship: &Relationship, father: Gender, mother: Gender) -> Option<Correction> {
    if !relationship.is_partners() {
        if father == mother {
            return Some(Correction { relabel: Some(Relationship::partners()), swap: false });
        }
        if father != Gender::Male || mother != Gender::Female {
            return Some(Correction { relabel: None, swap: true });
        }
        None
    } else if father != mother {
        Some(Correction { relabel: Some(Relationship::unknown()), swap: father == Gender::Female })
    } else {
        None
    }
}

/// Applies [`correction`] to every family with both parents present.
pub(crate) fn repair_parent_relationships(db: &mut Database) -> Vec<RelationshipFix> {
    let mut fixes = Vec::new();

    for family_id in db.family_ids() {
        let Some((before, fix)) = plan(db, family_id) else {
            continue;
        };
        let Some(family) = db.family_mut(family_id) else {
            continue;
        };

        if let Some(label) = fix.relabel {
            family.relationship = label;
        }
        if fix.swap {
            family.swap_parents();
        }
        let after = family.relationship.clone();

        log::debug!("{}: relationship '{}' -> '{}', swapped parents: {}", family_id, before, after, fix.swap);
        fixes.push(RelationshipFix { family: family_id, before, after, swapped: fix.swap });
        db.mark_modified();
    }

    fixes
}

fn plan(db: &Database, family_id: FamilyId) -> Option<(Relationship, Correction)> {
    let family = db.family(family_id)?;
    let father = db.person(family.father?)?;
    let mother = db.person(family.mother?)?;
    let fix = correction(&family.relationship, father.gender, mother.gender)?;
    Some((family.relationship.clone(), fix))
}
