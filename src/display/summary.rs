use crate::integrity::{BrokenLink, CheckReport};
use crate::store::{Database, PersonId};
use std::fmt::Write;

/// Renders a check report as the plain-text summary shown to the user.
///
/// `db` must be the database the report was produced from; it is only used to
/// look up names for the broken-link lines.
pub fn format_summary(db: &Database, report: &CheckReport) -> String {
    if report.is_clean() {
        return "No errors were found\n".to_string();
    }

    let mut out = String::new();

    match report.broken_links.len() {
        0 => {}
        1 => out.push_str("1 broken family link was fixed\n"),
        n => { let _ = writeln!(out, "{} broken family links were found", n); }
    }
    for link in &report.broken_links {
        let _ = writeln!(out, "\t{}", describe_link(db, link));
    }

    match report.empty_families.len() {
        0 => {}
        1 => out.push_str("1 empty family was found\n"),
        n => { let _ = writeln!(out, "{} empty families were found", n); }
    }

    match report.relationship_fixes.len() {
        0 => {}
        1 => out.push_str("1 corrupted family relationship fixed\n"),
        n => { let _ = writeln!(out, "{} corrupted family relationship fixed", n); }
    }

    match report.missing_media.len() {
        0 => {}
        1 => out.push_str("1 media object was referenced, but not found\n"),
        n => { let _ = writeln!(out, "{} media objects were referenced, but not found", n); }
    }

    out
}

fn describe_link(db: &Database, link: &BrokenLink) -> String {
    let child = person_name(db, link.child);
    let parents = db.family(link.family).and_then(|family| {
        let father = family.father.and_then(|id| db.person(id));
        let mother = family.mother.and_then(|id| db.person(id));
        match (father, mother) {
            (Some(f), Some(m)) => Some(format!(
                "{} and {}",
                f.primary_name.display(),
                m.primary_name.display()
            )),
            (Some(p), None) | (None, Some(p)) => Some(p.primary_name.display()),
            (None, None) => None,
        }
    });

    match parents {
        Some(parents) => format!("{} was removed from the family of {}", child, parents),
        None => format!("{} was removed from family {}", child, link.family),
    }
}

fn person_name(db: &Database, id: PersonId) -> String {
    db.person(id)
        .map(|p| p.primary_name.display())
        .unwrap_or_else(|| format!("Unknown person {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrity::{ConsistencyChecker, MissingMedia, RelationshipFix};
    use crate::store::{Family, FamilyId, Gender, MediaId, Name, Person, Relationship};
    use std::path::Path;

    #[test]
    fn test_clean_report() {
        assert_eq!(format_summary(&Database::new(), &CheckReport::default()), "No errors were found\n");
    }

    #[test]
    fn test_broken_link_lines_name_the_parents() {
        let mut db = Database::new();
        let dad = db.add_person(Person::new(Name::new("John", "Doe"), Gender::Male));
        let mum = db.add_person(Person::new(Name::new("Jane", "Roe"), Gender::Female));
        let kid = db.add_person(Person::new(Name::new("Jim", "Doe"), Gender::Male));
        let solo = db.add_person(Person::new(Name::new("Sue", "Poe"), Gender::Female));
        let both = db.add_family(Family::new(Some(dad), Some(mum), Relationship::new("Married")));
        let single = db.add_family(Family::new(None, Some(solo), Relationship::unknown()));
        db.add_child(both, kid).unwrap();
        db.add_child(single, kid).unwrap();

        let report = ConsistencyChecker::with_probe(&mut db, |_: &Path| true).run();
        let text = format_summary(&db, &report);

        assert_eq!(
            text,
            "2 broken family links were found\n\
             \tDoe, Jim was removed from the family of Doe, John and Roe, Jane\n\
             \tDoe, Jim was removed from the family of Poe, Sue\n"
        );
    }

    #[test]
    fn test_counts_use_singular_and_plural() {
        let report = CheckReport {
            empty_families: vec![FamilyId(7)],
            relationship_fixes: vec![
                RelationshipFix { family: FamilyId(1), before: Relationship::unknown(), after: Relationship::partners(), swapped: false },
                RelationshipFix { family: FamilyId(2), before: Relationship::partners(), after: Relationship::unknown(), swapped: true },
            ],
            missing_media: vec![MissingMedia { media: MediaId(0), path: "/a.jpg".into() }],
            ..Default::default()
        };
        let text = format_summary(&Database::new(), &report);

        assert_eq!(
            text,
            "1 empty family was found\n\
             2 corrupted family relationship fixed\n\
             1 media object was referenced, but not found\n"
        );
    }

    #[test]
    fn test_link_to_deleted_family_falls_back_to_id() {
        let mut db = Database::new();
        let kid = db.add_person(Person::new(Name::new("Jim", "Doe"), Gender::Male));
        let report = CheckReport {
            broken_links: vec![BrokenLink { child: kid, family: FamilyId(3) }],
            ..Default::default()
        };
        let text = format_summary(&db, &report);
        assert!(text.starts_with("1 broken family link was fixed\n"));
        assert!(text.contains("\tDoe, Jim was removed from family F3\n"), "Text: {}", text);

        let ghost = BrokenLink { child: PersonId(99), family: FamilyId(3) };
        assert_eq!(describe_link(&db, &ghost), "Unknown person I99 was removed from family F3");
    }
}
