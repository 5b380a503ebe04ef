//! Reading the active version back from the `current` pointer.

use std::fs;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::switch::PointerStatus;

/// Printed by the CLI when no version has been selected yet
pub const UNSET: &str = "jdkenv not used";

/// The active version, or `None` if no pointer exists.
///
/// A pointer whose target does not have the shape `activate` creates means
/// something else wrote it, and is reported as [`Error::UnexpectedTarget`].
pub fn current_version(config: &Config) -> Result<Option<String>> {
    let link = &config.current_link;
    let target = match PointerStatus::detect(link)? {
        PointerStatus::Missing => return Ok(None),
        PointerStatus::NotSymlink => {
            return Err(Error::PointerNotSymlink { path: link.clone() });
        }
        PointerStatus::Symlink { target } | PointerStatus::BrokenSymlink { target } => target,
    };

    let version = config.layout.recover_version_id(&target)?;
    debug!("{} -> {} ({})", link.display(), target.display(), version);
    Ok(Some(version))
}

/// When the pointer was last repointed, if it exists
pub fn last_switched(config: &Config) -> Option<chrono::DateTime<chrono::Local>> {
    fs::symlink_metadata(&config.current_link)
        .and_then(|m| m.modified())
        .ok()
        .map(Into::into)
}
