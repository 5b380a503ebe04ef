//! Platform install layouts.
//!
//! All knowledge about where installs live and what an install path looks
//! like is kept here, so that the scanner, the switch and the reader never
//! branch on the platform themselves.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Directory-name prefix a flat install must carry to be listed.
pub const DEFAULT_PREFIX: &str = "jdk";

/// OS-level install roots of the split layout, in search order.
pub const SYSTEM_JVM_ROOT: &str = "/System/Library/Java/JavaVirtualMachines";
pub const LIBRARY_JVM_ROOT: &str = "/Library/Java/JavaVirtualMachines";

/// Segments between a split-layout version directory and its home directory.
const BUNDLE_HOME: [&str; 2] = ["Contents", "Home"];

/// Layout name as written in `config.json`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Flat,
    Split,
}

impl LayoutKind {
    /// Layout used when the config file does not choose one
    pub fn host() -> Self {
        if cfg!(target_os = "macos") {
            Self::Split
        } else {
            Self::Flat
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// One root holding `<prefix>*` version directories.
    Flat { root: PathBuf, prefix: String },
    /// Several roots holding `<version>/Contents/Home` bundles.
    Split { roots: Vec<PathBuf> },
}

impl Layout {
    pub fn kind(&self) -> LayoutKind {
        match self {
            Layout::Flat { .. } => LayoutKind::Flat,
            Layout::Split { .. } => LayoutKind::Split,
        }
    }

    /// Roots to scan, in search order
    pub fn install_roots(&self) -> Vec<&Path> {
        match self {
            Layout::Flat { root, .. } => vec![root.as_path()],
            Layout::Split { roots } => roots.iter().map(PathBuf::as_path).collect(),
        }
    }

    /// Whether a directory name found under a root is a version
    pub fn accepts(&self, name: &str) -> bool {
        match self {
            Layout::Flat { prefix, .. } => name.starts_with(prefix.as_str()),
            Layout::Split { .. } => true,
        }
    }

    /// The path the pointer should target for `version` installed under `root`
    pub fn install_path_for(&self, root: &Path, version: &str) -> PathBuf {
        let dir = root.join(version);
        match self {
            Layout::Flat { .. } => dir,
            Layout::Split { .. } => BUNDLE_HOME.iter().fold(dir, |p, seg| p.join(seg)),
        }
    }

    /// Search each root for `version` and return the install path of the first hit.
    pub fn locate(&self, version: &str) -> Option<PathBuf> {
        self.install_roots()
            .into_iter()
            .find(|root| root.join(version).is_dir())
            .map(|root| self.install_path_for(root, version))
    }

    /// Invert [`Layout::install_path_for`] on a pointer target.
    pub fn recover_version_id(&self, target: &Path) -> Result<String> {
        let unexpected = || Error::UnexpectedTarget {
            path: target.to_path_buf(),
        };

        let version_dir = match self {
            Layout::Flat { .. } => target,
            Layout::Split { .. } => {
                let mut dir = target;
                for seg in BUNDLE_HOME.iter().rev() {
                    if dir.file_name().and_then(|n| n.to_str()) != Some(*seg) {
                        return Err(unexpected());
                    }
                    dir = dir.parent().ok_or_else(unexpected)?;
                }
                dir
            }
        };

        version_dir
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(unexpected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat() -> Layout {
        Layout::Flat {
            root: PathBuf::from("/home/u/.jdkenv/java"),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    fn split() -> Layout {
        Layout::Split {
            roots: vec![PathBuf::from(SYSTEM_JVM_ROOT), PathBuf::from(LIBRARY_JVM_ROOT)],
        }
    }

    #[test]
    fn test_flat_install_path() {
        let layout = flat();
        let root = layout.install_roots()[0].to_path_buf();
        assert_eq!(
            layout.install_path_for(&root, "jdk-17.0.1"),
            PathBuf::from("/home/u/.jdkenv/java/jdk-17.0.1")
        );
    }

    #[test]
    fn test_split_install_path() {
        let layout = split();
        assert_eq!(
            layout.install_path_for(Path::new(LIBRARY_JVM_ROOT), "temurin-17.jdk"),
            PathBuf::from("/Library/Java/JavaVirtualMachines/temurin-17.jdk/Contents/Home")
        );
    }

    #[test]
    fn test_accepts() {
        assert!(flat().accepts("jdk-11.0.2"));
        assert!(!flat().accepts("current"));
        assert!(!flat().accepts("openjdk-11"));
        assert!(split().accepts("11"));
    }

    #[test]
    fn test_recover_inverts_install_path() {
        for layout in [flat(), split()] {
            for root in layout.install_roots() {
                let target = layout.install_path_for(root, "jdk1.8.0_202.jdk");
                assert_eq!(layout.recover_version_id(&target).unwrap(), "jdk1.8.0_202.jdk");
            }
        }
    }

    #[test]
    fn test_split_recover_rejects_other_shapes() {
        let layout = split();
        for bad in [
            "/Library/Java/JavaVirtualMachines/17",
            "/Library/Java/JavaVirtualMachines/17/Contents",
            "/Library/Java/JavaVirtualMachines/17/Home/Contents",
            "Contents/Home",
        ] {
            assert!(
                matches!(
                    layout.recover_version_id(Path::new(bad)),
                    Err(Error::UnexpectedTarget { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_flat_recover_rejects_root() {
        assert!(flat().recover_version_id(Path::new("/")).is_err());
    }
}
