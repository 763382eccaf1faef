//! The checker that runs the integrity passes against a database and collects findings.
use super::probe::{FileProbe, FsProbe};
use super::report::{BrokenLink, CheckReport, MissingMedia, RelationshipFix};
use super::rules::{empty_families, family_links, media, parents};
use crate::config::CheckOptions;
use crate::store::{Database, FamilyId};

/// Orchestrates the check-and-repair passes over one database.
///
/// Each pass is independently callable and resets its own findings before it
/// runs, so calling a pass twice reports only what the second call changed.
/// Mutations are applied in place and are not rolled back; the caller owns the
/// database exclusively for the checker's lifetime.
pub struct ConsistencyChecker<'a, P: FileProbe = FsProbe> {
    db: &'a mut Database,
    probe: P,
    options: CheckOptions,
    broken_links: Vec<BrokenLink>,
    empty_families: Vec<FamilyId>,
    relationship_fixes: Vec<RelationshipFix>,
    missing_media: Vec<MissingMedia>,
    modified: bool,
}

impl<'a> ConsistencyChecker<'a, FsProbe> {
    /// A checker that probes media files on the real filesystem.
    pub fn new(db: &'a mut Database) -> Self {
        Self::with_probe(db, FsProbe)
    }
}

impl<'a, P: FileProbe> ConsistencyChecker<'a, P> {
    pub fn with_probe(db: &'a mut Database, probe: P) -> Self {
        Self {
            db,
            probe,
            options: CheckOptions::default(),
            broken_links: Vec::new(),
            empty_families: Vec::new(),
            relationship_fixes: Vec::new(),
            missing_media: Vec::new(),
            modified: false,
        }
    }

    pub fn with_options(mut self, options: CheckOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs the enabled passes in their fixed order and returns the findings.
    ///
    /// Broken links are cleaned before empty families are removed, so a family's
    /// child list is accurate by the time it is deleted.
    pub fn run(&mut self) -> CheckReport {
        if self.options.family_links {
            self.scan_broken_family_links();
        }
        if self.options.missing_media {
            self.scan_missing_photos();
        }
        if self.options.parent_relationships {
            self.scan_parent_gender_consistency();
        }
        if self.options.empty_families {
            self.remove_empty_families();
        }

        let report = self.summarize();
        log::info!(
            "Integrity check finished: {} problem(s), database {}",
            report.error_count(),
            if report.modified { "modified" } else { "unchanged" }
        );
        report
    }

    /// Drops children from families that they do not claim as main or alternate family.
    pub fn scan_broken_family_links(&mut self) -> &[BrokenLink] {
        self.broken_links = family_links::repair_broken_links(self.db);
        self.modified |= !self.broken_links.is_empty();
        log::info!("Broken family links removed: {}", self.broken_links.len());
        &self.broken_links
    }

    /// Reports media objects whose files cannot be found. Read-only.
    pub fn scan_missing_photos(&mut self) -> &[MissingMedia] {
        self.missing_media =
            media::find_missing_media(self.db, &self.probe, self.options.media_base.as_deref());
        log::info!("Missing media files: {}", self.missing_media.len());
        &self.missing_media
    }

    /// Makes relationship labels and father/mother roles agree with the parents' genders.
    pub fn scan_parent_gender_consistency(&mut self) -> &[RelationshipFix] {
        self.relationship_fixes = parents::repair_parent_relationships(self.db);
        self.modified |= !self.relationship_fixes.is_empty();
        log::info!("Family relationships corrected: {}", self.relationship_fixes.len());
        &self.relationship_fixes
    }

    /// Deletes families with neither father nor mother.
    pub fn remove_empty_families(&mut self) -> &[FamilyId] {
        self.empty_families = empty_families::remove_empty_families(self.db);
        self.modified |= !self.empty_families.is_empty();
        log::info!("Empty families removed: {}", self.empty_families.len());
        &self.empty_families
    }

    /// The findings so far. No side effects.
    pub fn summarize(&self) -> CheckReport {
        CheckReport {
            broken_links: self.broken_links.clone(),
            empty_families: self.empty_families.clone(),
            relationship_fixes: self.relationship_fixes.clone(),
            missing_media: self.missing_media.clone(),
            modified: self.modified,
        }
    }
}
