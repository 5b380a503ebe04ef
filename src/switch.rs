//! Active version switching.
//!
//! This module implements the core mechanism of `jdkenv use`: repointing the
//! `current` symlink at a version's install path. It handles:
//! - Locating the install across the layout's roots.
//! - Refusing to clobber anything at the pointer path that is not a symlink.
//! - Replacing live or broken pointers.
//!
//! Switching is remove-then-create. Between the two steps no pointer exists;
//! if the process dies there, the pointer stays absent until the next
//! successful `use`. There is no locking: concurrent invocations leave the
//! pointer at whichever writer finished last.

use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

use crate::config::{CURRENT_LINK, Config};
use crate::error::{Error, Result};
use crate::fs_utils::{make_symlink, remove_symlink};

/// What currently sits at the pointer path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerStatus {
    Missing,
    Symlink { target: PathBuf },
    BrokenSymlink { target: PathBuf },
    /// A regular file or directory; never created by jdkenv
    NotSymlink,
}

impl PointerStatus {
    pub fn detect(path: &Path) -> Result<Self> {
        // symlink_metadata does not follow the link, so broken links are seen too
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::Missing),
            Err(e) => return Err(Error::io("Failed to inspect pointer", path, e)),
        };

        if !meta.file_type().is_symlink() {
            return Ok(Self::NotSymlink);
        }

        let target =
            fs::read_link(path).map_err(|e| Error::io("Failed to read symlink", path, e))?;
        if path.exists() {
            Ok(Self::Symlink { target })
        } else {
            Ok(Self::BrokenSymlink { target })
        }
    }
}

/// A name that can only ever refer to a directory directly inside an install root
fn is_plain_name(version: &str) -> bool {
    let mut components = Path::new(version).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == version
    )
}

/// Point `current` at `version`, returning the new target.
///
/// Fails with [`Error::NotFound`] without touching the pointer when no root
/// holds `version`.
pub fn activate(config: &Config, version: &str) -> Result<PathBuf> {
    if !is_plain_name(version) || version == CURRENT_LINK {
        return Err(Error::not_found(version, config.layout.kind()));
    }

    let install_path = config
        .layout
        .locate(version)
        .ok_or_else(|| Error::not_found(version, config.layout.kind()))?;
    debug!("Located {} at {}", version, install_path.display());

    let link = &config.current_link;
    match PointerStatus::detect(link)? {
        PointerStatus::Missing => {}
        PointerStatus::NotSymlink => {
            return Err(Error::PointerNotSymlink { path: link.clone() });
        }
        PointerStatus::Symlink { target } | PointerStatus::BrokenSymlink { target } => {
            debug!("Removing previous pointer to {}", target.display());
            remove_symlink(link).map_err(|e| Error::io("Failed to remove symlink", link, e))?;
        }
    }

    if let Some(parent) = link.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| Error::io("Failed to create store root", parent, e))?;
    }
    make_symlink(&install_path, link).map_err(|e| {
        Error::io(
            format!("Failed to create symlink to {}", install_path.display()),
            link,
            e,
        )
    })?;

    info!("Switched {} -> {}", link.display(), install_path.display());
    Ok(install_path)
}
