use super::types::*;
use crate::error::CheckError;

/// In-memory genealogical database.
///
/// Records live in dense columns addressed by their ids. Families can be deleted,
/// so their column holds tombstones: a deleted family's id is never handed out again
/// and every lookup of it returns `None`.
#[derive(Debug, Clone, Default)]
pub struct Database {
    people: Vec<Person>,
    families: Vec<Option<Family>>,
    media: Vec<MediaObject>,
    modified: bool,
}

impl Database {
    pub fn new() -> Self { Self::default() }

    pub fn person_count(&self) -> usize { self.people.len() }
    pub fn family_count(&self) -> usize { self.families.iter().flatten().count() }
    pub fn media_count(&self) -> usize { self.media.len() }

    // --- Record creation ---

    pub fn add_person(&mut self, person: Person) -> PersonId {
        let id = PersonId::new(self.people.len());
        self.people.push(person);
        id
    }

    pub fn add_family(&mut self, family: Family) -> FamilyId {
        let id = FamilyId::new(self.families.len());
        self.families.push(Some(family));
        id
    }

    pub fn add_media(&mut self, media: MediaObject) -> MediaId {
        let id = MediaId::new(self.media.len());
        self.media.push(media);
        id
    }

    // --- Lookups ---

    pub fn person(&self, id: PersonId) -> Option<&Person> { self.people.get(id.index()) }
    pub fn person_mut(&mut self, id: PersonId) -> Option<&mut Person> { self.people.get_mut(id.index()) }

    pub fn family(&self, id: FamilyId) -> Option<&Family> {
        self.families.get(id.index())?.as_ref()
    }

    pub fn family_mut(&mut self, id: FamilyId) -> Option<&mut Family> {
        self.families.get_mut(id.index())?.as_mut()
    }

    /// Snapshot of all person ids.
    pub fn person_ids(&self) -> Vec<PersonId> {
        (0..self.people.len()).map(PersonId::new).collect()
    }

    /// Snapshot of the ids of all live families. Safe to hold across `delete_family`.
    pub fn family_ids(&self) -> Vec<FamilyId> {
        self.families.iter().enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| FamilyId::new(i))
            .collect()
    }

    pub fn people(&self) -> impl Iterator<Item = (PersonId, &Person)> {
        self.people.iter().enumerate().map(|(i, p)| (PersonId::new(i), p))
    }

    pub fn media_objects(&self) -> impl Iterator<Item = (MediaId, &MediaObject)> {
        self.media.iter().enumerate().map(|(i, m)| (MediaId::new(i), m))
    }

    // --- Validating builders ---
    // These check that the referenced records exist but never reconcile the two
    // sides of a relationship; that is the integrity checker's job.

    /// Lists `person` as a child of `family` without touching the person's own references.
    pub fn add_child(&mut self, family: FamilyId, person: PersonId) -> Result<(), CheckError> {
        self.require_person(person)?;
        self.family_mut(family)
            .ok_or(CheckError::UnknownFamily(family))?
            .children.push(person);
        Ok(())
    }

    pub fn set_main_family(&mut self, person: PersonId, family: Option<FamilyId>) -> Result<(), CheckError> {
        if let Some(f) = family {
            self.require_family(f)?;
        }
        self.person_mut(person).ok_or(CheckError::UnknownPerson(person))?.main_family = family;
        Ok(())
    }

    pub fn add_alt_family(&mut self, person: PersonId, family: FamilyId, relation: impl Into<String>) -> Result<(), CheckError> {
        self.require_family(family)?;
        self.person_mut(person)
            .ok_or(CheckError::UnknownPerson(person))?
            .alt_families.push(AltFamily { family, relation: relation.into() });
        Ok(())
    }

    pub fn set_parents(&mut self, family: FamilyId, father: Option<PersonId>, mother: Option<PersonId>) -> Result<(), CheckError> {
        for parent in father.iter().chain(mother.iter()) {
            self.require_person(*parent)?;
        }
        let fam = self.family_mut(family).ok_or(CheckError::UnknownFamily(family))?;
        fam.father = father;
        fam.mother = mother;
        Ok(())
    }

    // --- Deletion ---

    /// Removes the family record. References to it held by people are left as they are.
    pub fn delete_family(&mut self, id: FamilyId) -> Option<Family> {
        self.families.get_mut(id.index())?.take()
    }

    // --- Dirty flag ---

    pub fn mark_modified(&mut self) { self.modified = true; }
    pub fn is_modified(&self) -> bool { self.modified }
    pub fn clear_modified(&mut self) { self.modified = false; }

    fn require_person(&self, id: PersonId) -> Result<(), CheckError> {
        self.person(id).map(|_| ()).ok_or(CheckError::UnknownPerson(id))
    }

    fn require_family(&self, id: FamilyId) -> Result<(), CheckError> {
        self.family(id).map(|_| ()).ok_or(CheckError::UnknownFamily(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(first: &str, surname: &str, gender: Gender) -> Person {
        Person::new(Name::new(first, surname), gender)
    }

    #[test]
    fn test_deleted_family_ids_are_not_reused() {
        let mut db = Database::new();
        let f0 = db.add_family(Family::default());
        let f1 = db.add_family(Family::default());

        assert!(db.delete_family(f0).is_some());
        assert!(db.family(f0).is_none());
        assert_eq!(db.family_ids(), vec![f1]);
        assert_eq!(db.family_count(), 1);

        let f2 = db.add_family(Family::default());
        assert_ne!(f2, f0);
        assert!(db.delete_family(f0).is_none(), "Second delete must be a no-op");
    }

    #[test]
    fn test_builders_reject_unknown_ids() {
        let mut db = Database::new();
        let p = db.add_person(person("Ann", "Smith", Gender::Female));
        let f = db.add_family(Family::default());

        assert_eq!(db.add_child(FamilyId(9), p), Err(CheckError::UnknownFamily(FamilyId(9))));
        assert_eq!(db.add_child(f, PersonId(9)), Err(CheckError::UnknownPerson(PersonId(9))));
        assert_eq!(db.set_main_family(p, Some(FamilyId(3))), Err(CheckError::UnknownFamily(FamilyId(3))));
        assert_eq!(db.set_parents(f, Some(PersonId(4)), None), Err(CheckError::UnknownPerson(PersonId(4))));

        db.delete_family(f);
        assert_eq!(db.add_alt_family(p, f, "Adopted"), Err(CheckError::UnknownFamily(f)));
    }

    #[test]
    fn test_add_child_leaves_person_untouched() {
        let mut db = Database::new();
        let child = db.add_person(person("Tom", "Smith", Gender::Male));
        let fam = db.add_family(Family::default());

        db.add_child(fam, child).unwrap();

        assert_eq!(db.family(fam).unwrap().children, vec![child]);
        assert_eq!(db.person(child).unwrap().main_family, None);
        assert!(!db.is_modified());
    }

    #[test]
    fn test_person_alt_family_helpers() {
        let mut p = person("Tom", "Smith", Gender::Male);
        p.alt_families.push(AltFamily { family: FamilyId(1), relation: "Adopted".into() });
        p.alt_families.push(AltFamily { family: FamilyId(1), relation: "Foster".into() });
        p.main_family = Some(FamilyId(0));

        assert!(p.belongs_to(FamilyId(0)));
        assert!(p.belongs_to(FamilyId(1)));
        assert!(!p.belongs_to(FamilyId(2)));

        assert!(p.remove_alt_family(FamilyId(1)));
        assert!(p.alt_families.is_empty());
        assert!(!p.remove_alt_family(FamilyId(1)));
    }

    #[test]
    fn test_name_display() {
        let mut name = Name::new("John", "Doe");
        assert_eq!(name.display(), "Doe, John");
        name.suffix = Some("Jr.".into());
        assert_eq!(name.display(), "Doe, John Jr.");
    }

    #[test]
    fn test_set_parents() {
        let mut db = Database::new();
        let dad = db.add_person(person("Tom", "Smith", Gender::Male));
        let fam = db.add_family(Family::default());

        db.set_parents(fam, Some(dad), None).unwrap();
        let family = db.family(fam).unwrap();
        assert_eq!(family.father, Some(dad));
        assert_eq!(family.mother, None);
    }

    #[test]
    fn test_ids_from_external_indices() {
        assert_eq!(PersonId::from_index(7), Some(PersonId(7)));
        assert_eq!(FamilyId::from_index(u32::MAX as usize), Some(FamilyId(u32::MAX)));
        // One past u32::MAX would alias record 0 under a plain cast.
        if let Some(past_end) = (u32::MAX as usize).checked_add(1) {
            assert_eq!(PersonId::from_index(past_end), None);
        }
        assert_eq!(FamilyId::from_index(usize::MAX), None);
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::parse("Male"), Gender::Male);
        assert_eq!(Gender::parse(" f "), Gender::Female);
        assert_eq!(Gender::parse("other"), Gender::Unknown);
    }
}
