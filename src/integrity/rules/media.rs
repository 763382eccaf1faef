//! Detection of media objects whose files are gone.

use crate::integrity::probe::FileProbe;
use crate::integrity::report::MissingMedia;
use crate::store::Database;
use std::path::{Path, PathBuf};

/// Reports every media object the probe cannot find. Never mutates the database.
pub(crate) fn find_missing_media<P: FileProbe + ?Sized>(
    db: &Database,
    probe: &P,
    media_base: Option<&Path>,
) -> Vec<MissingMedia> {
    db.media_objects()
        .filter_map(|(media, object)| {
            let path = resolve(&object.path, media_base);
            if probe.exists(&path) {
                None
            } else {
                log::debug!("{} references missing file {}", media, path.display());
                Some(MissingMedia { media, path })
            }
        })
        .collect()
}

fn resolve(path: &Path, media_base: Option<&Path>) -> PathBuf {
    match media_base {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}
