//! Options controlling a check run.
use crate::error::CheckError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Selects the passes of a check run and how media paths are resolved.
///
/// Every pass is enabled by default. Missing JSON fields fall back to the default,
/// so `{}` is a valid options document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckOptions {
    pub family_links: bool,
    pub missing_media: bool,
    pub parent_relationships: bool,
    pub empty_families: bool,
    /// Directory that relative media paths are resolved against.
    pub media_base: Option<PathBuf>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            family_links: true,
            missing_media: true,
            parent_relationships: true,
            empty_families: true,
            media_base: None,
        }
    }
}

impl CheckOptions {
    pub fn from_json(text: &str) -> Result<Self, CheckError> {
        serde_json::from_str(text).map_err(|e| CheckError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_enables_everything() {
        assert_eq!(CheckOptions::from_json("{}").unwrap(), CheckOptions::default());
    }

    #[test]
    fn test_partial_document() {
        let opts = CheckOptions::from_json(r#"{"missing_media": false, "media_base": "/srv/photos"}"#).unwrap();
        assert!(!opts.missing_media);
        assert!(opts.family_links);
        assert_eq!(opts.media_base, Some(PathBuf::from("/srv/photos")));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = CheckOptions::from_json(r#"{"photos": true}"#).unwrap_err();
        assert!(matches!(err, CheckError::Config(_)), "Got: {:?}", err);
    }
}
