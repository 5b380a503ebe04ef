//! Test utilities shared across test modules
//!
//! Builds a [`Config`] rooted in a temporary directory, with fake OS-level
//! install roots for the split layout.

use std::path::PathBuf;
use tempfile::TempDir;

use crate::config::{Config, ConfigFile};
use crate::layout::LayoutKind;

/// Create a Config whose every path lives inside `temp_dir`
pub fn setup_test_config(temp_dir: &TempDir, kind: LayoutKind) -> Config {
    let home = temp_dir.path().to_path_buf();
    let file = ConfigFile {
        layout: Some(kind),
        prefix: None,
        install_roots: Some(vec![
            home.join("System/Library/Java/JavaVirtualMachines"),
            home.join("Library/Java/JavaVirtualMachines"),
        ]),
    };
    Config::from_parts(home.clone(), home.join(".jdkenv"), file)
}

/// Lay out a fake install for `version` in the first install root and
/// return the path the pointer would target.
pub fn install(config: &Config, version: &str) -> PathBuf {
    let root = config.layout.install_roots()[0].to_path_buf();
    let home = config.layout.install_path_for(&root, version);
    std::fs::create_dir_all(home.join("bin")).unwrap();
    home
}
