//! Repair of child lists that disagree with the children's own records.

use crate::integrity::report::BrokenLink;
use crate::store::{Database, FamilyId, PersonId};

/// "The Birth Certificate Rule": a family may only list a child who claims it back.
///
/// The person's own records win. A child whose main family is a different family,
/// and who holds no alternate association with this one, is dropped from the
/// family's child list. A child id with no person record behind it is dropped too.
pub(crate) fn repair_broken_links(db: &mut Database) -> Vec<BrokenLink> {
    let mut broken = Vec::new();

    for family_id in db.family_ids() {
        let stray = stray_children(db, family_id);
        if stray.is_empty() {
            continue;
        }

        if let Some(family) = db.family_mut(family_id) {
            for &child in &stray {
                family.remove_child(child);
            }
        }
        for child in stray {
            log::debug!("Removed {} from the child list of {}", child, family_id);
            broken.push(BrokenLink { child, family: family_id });
        }
        db.mark_modified();
    }

    broken
}

/// Distinct children of `family_id` that do not belong to it, in list order.
fn stray_children(db: &Database, family_id: FamilyId) -> Vec<PersonId> {
    let Some(family) = db.family(family_id) else {
        return Vec::new();
    };

    let mut stray: Vec<PersonId> = Vec::new();
    for &child in &family.children {
        let claimed = match db.person(child) {
            Some(person) => person.belongs_to(family_id),
            None => {
                log::warn!("{} lists {} as a child, but no such person exists", family_id, child);
                false
            }
        };
        if !claimed && !stray.contains(&child) {
            stray.push(child);
        }
    }
    stray
}
