//! Installed-version discovery.
//!
//! Scanning never fails as a whole: an unreadable root is reported as a
//! [`ScanIssue`] and contributes no versions, so `list` degrades to
//! "nothing installed" instead of aborting.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

use crate::config::Config;
use crate::fs_utils::subdirectory_names;
use crate::layout::Layout;

/// A non-fatal problem met while scanning an install root
#[derive(Debug)]
pub enum ScanIssue {
    /// The root could not be read (missing, permission denied, ...)
    Unreadable { root: PathBuf, error: std::io::Error },
    /// The flat store root exists but holds nothing at all
    Empty { root: PathBuf },
}

impl fmt::Display for ScanIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanIssue::Unreadable { root, error } => {
                write!(f, "cannot read {}: {}", root.display(), error)
            }
            ScanIssue::Empty { root } => write!(f, "jdk isn't exists at {}", root.display()),
        }
    }
}

/// Result of scanning every install root
#[derive(Debug, Default)]
pub struct Scan {
    /// Distinct version identifiers, sorted
    pub versions: Vec<String>,
    pub issues: Vec<ScanIssue>,
}

impl Scan {
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

/// List installed versions across the layout's install roots
pub fn list_versions(config: &Config) -> Scan {
    let layout = &config.layout;
    let check_empty = matches!(layout, Layout::Flat { .. });

    let mut scan = Scan::default();
    let mut seen = HashSet::new();

    for root in layout.install_roots() {
        let (total, names) = match subdirectory_names(root) {
            Ok(found) => found,
            Err(error) => {
                debug!("Skipping unreadable install root {}: {}", root.display(), error);
                scan.issues.push(ScanIssue::Unreadable {
                    root: root.to_path_buf(),
                    error,
                });
                continue;
            }
        };

        if check_empty && total == 0 {
            scan.issues.push(ScanIssue::Empty {
                root: root.to_path_buf(),
            });
            continue;
        }

        for name in names {
            if !layout.accepts(&name) || root.join(&name) == config.current_link {
                continue;
            }
            if seen.insert(name.clone()) {
                scan.versions.push(name);
            } else {
                debug!("{} also present in {}, keeping the first root", name, root.display());
            }
        }
    }

    scan.versions.sort();
    debug!("Found {} installed version(s)", scan.versions.len());
    scan
}
