//! Removal of families that have neither father nor mother.

use crate::store::{Database, FamilyId};

/// Deletes every empty family and detaches the people who pointed at it.
///
/// The empty families are collected from a snapshot before anything is deleted.
pub(crate) fn remove_empty_families(db: &mut Database) -> Vec<FamilyId> {
    let empty: Vec<FamilyId> = db
        .family_ids()
        .into_iter()
        .filter(|&id| db.family(id).is_some_and(|f| f.is_empty()))
        .collect();

    for &family_id in &empty {
        detach_members(db, family_id);
        db.delete_family(family_id);
        log::debug!("Deleted empty family {}", family_id);
        db.mark_modified();
    }

    empty
}

fn detach_members(db: &mut Database, family_id: FamilyId) {
    for person_id in db.person_ids() {
        let Some(person) = db.person_mut(person_id) else {
            continue;
        };
        if person.main_family == Some(family_id) {
            person.main_family = None;
        } else {
            person.remove_alt_family(family_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Family, Gender, Name, Person, Relationship};

    #[test]
    fn test_empty_family_is_deleted_and_references_cleared() {
        let mut db = Database::new();
        let f3 = db.add_family(Family::default());
        let other = db.add_family(Family::default());
        let born = db.add_person(Person::new(Name::new("Ann", "Roe"), Gender::Female));
        let adopted = db.add_person(Person::new(Name::new("Bob", "Roe"), Gender::Male));
        db.set_main_family(born, Some(f3)).unwrap();
        db.set_main_family(adopted, Some(other)).unwrap();
        db.add_alt_family(adopted, f3, "Adopted").unwrap();
        db.add_child(f3, born).unwrap();

        // `other` is also empty, so both go.
        let removed = remove_empty_families(&mut db);

        assert_eq!(removed, vec![f3, other]);
        assert!(db.family(f3).is_none());
        assert_eq!(db.family_count(), 0);
        assert_eq!(db.person(born).unwrap().main_family, None);
        let adopted = db.person(adopted).unwrap();
        assert!(adopted.alt_families.is_empty());
        assert_eq!(adopted.main_family, None);
        assert!(db.is_modified());
    }

    #[test]
    fn test_single_parent_family_survives() {
        let mut db = Database::new();
        let mother = db.add_person(Person::new(Name::new("Eve", "Roe"), Gender::Female));
        let fam = db.add_family(Family::new(None, Some(mother), Relationship::unknown()));

        assert!(remove_empty_families(&mut db).is_empty());
        assert!(db.family(fam).is_some());
        assert!(!db.is_modified());
    }
}
