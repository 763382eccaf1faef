//! File-existence capability used by the missing-media scan.
use std::path::Path;

/// Answers whether a media file is present.
///
/// Implementations must be total: a path that cannot be inspected is reported
/// as absent rather than as an error.
pub trait FileProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Probes the real filesystem. Only regular files count as present.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        std::fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
    }
}

impl<F> FileProbe for F
where
    F: Fn(&Path) -> bool,
{
    fn exists(&self, path: &Path) -> bool { self(path) }
}
