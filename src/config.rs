use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::layout::{DEFAULT_PREFIX, LIBRARY_JVM_ROOT, Layout, LayoutKind, SYSTEM_JVM_ROOT};

/// Environment variable overriding the base directory
pub const ROOT_ENV: &str = "JDKENV_ROOT";

/// Name of the active-version symlink inside the store root
pub const CURRENT_LINK: &str = "current";

/// Optional overrides read from ~/.jdkenv/config.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutKind>,

    /// Directory-name prefix for the flat layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Install roots for the split layout, in search order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_roots: Option<Vec<PathBuf>>,
}

impl ConfigFile {
    /// Read the config file, returning defaults if it doesn't exist
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io("Failed to read config file", path, e))?;

        serde_json::from_str(&content).map_err(|e| Error::Config {
            message: format!("{}: {}", path.display(), e),
        })
    }
}

/// Everything jdkenv needs to know about the filesystem, computed once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// The invoking user's home directory
    pub home_dir: PathBuf,
    /// ~/.jdkenv
    pub base_dir: PathBuf,
    /// ~/.jdkenv/java
    pub store_root: PathBuf,
    /// ~/.jdkenv/java/current
    pub current_link: PathBuf,
    pub layout: Layout,
}

impl Config {
    pub fn load() -> Result<Self> {
        let base_dirs = BaseDirs::new().ok_or_else(|| Error::Config {
            message: "Failed to determine home directory".to_string(),
        })?;
        let home_dir = base_dirs.home_dir().to_path_buf();

        let base_dir = match std::env::var_os(ROOT_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => home_dir.join(".jdkenv"),
        };

        let file = ConfigFile::read(&base_dir.join("config.json"))?;
        Ok(Self::from_parts(home_dir, base_dir, file))
    }

    /// Assemble a config from explicit parts, without touching the environment
    pub fn from_parts(home_dir: PathBuf, base_dir: PathBuf, file: ConfigFile) -> Self {
        let store_root = base_dir.join("java");
        let current_link = store_root.join(CURRENT_LINK);

        let layout = match file.layout.unwrap_or_else(LayoutKind::host) {
            LayoutKind::Flat => Layout::Flat {
                root: store_root.clone(),
                prefix: file.prefix.unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            },
            LayoutKind::Split => Layout::Split {
                roots: file.install_roots.unwrap_or_else(|| {
                    vec![PathBuf::from(SYSTEM_JVM_ROOT), PathBuf::from(LIBRARY_JVM_ROOT)]
                }),
            },
        };

        Self {
            home_dir,
            base_dir,
            store_root,
            current_link,
            layout,
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Create the store root if it is missing
    pub fn ensure_store_root(&self) -> Result<()> {
        std::fs::create_dir_all(&self.store_root)
            .map_err(|e| Error::io("Failed to create store root", &self.store_root, e))
    }
}
