//! Diagnostic tool for jdkenv.
//!
//! This module implements the `jdkenv doctor` command, which checks:
//! - The store root and config file.
//! - The state of the `current` pointer.
//! - Each install root and how many versions it holds.
//! - Whether `JAVA_HOME` points at the pointer.

use anstyle::AnsiColor;
use std::env;
use std::path::Path;

use crate::config::Config;
use crate::current::{current_version, last_switched};
use crate::fs_utils::subdirectory_names;
use crate::switch::PointerStatus;
use crate::ui::{Icon, Ui};

/// Run the doctor diagnostics
pub fn run_doctor(config: &Config, ui: &Ui) {
    ui.section("jdkenv Doctor");
    ui.newline();

    // 1. Store root
    check_step(ui, "Store Root", || {
        if config.store_root.is_dir() {
            ui.println(format!(
                "  {} Store root exists: {}",
                ui.icon(Icon::Ok),
                config.store_root.display()
            ));
        } else {
            ui.println(format!(
                "  {} Store root missing: {} (run 'jdkenv init')",
                ui.icon(Icon::Err),
                config.store_root.display()
            ));
            return false;
        }

        let config_file = config.config_file();
        if config_file.exists() {
            ui.println(format!(
                "  {} Using config file: {}",
                ui.icon(Icon::Info),
                config_file.display()
            ));
        }
        ui.println(format!(
            "  {} Layout: {:?}",
            ui.icon(Icon::Info),
            config.layout.kind()
        ));
        true
    });

    // 2. Pointer
    check_step(ui, "Current Pointer", || {
        let link = &config.current_link;
        let status = match PointerStatus::detect(link) {
            Ok(status) => status,
            Err(e) => {
                ui.println(format!("  {} {}", ui.icon(Icon::Err), e));
                return false;
            }
        };

        match status {
            PointerStatus::Missing => {
                ui.println(format!("  {} No version selected yet", ui.icon(Icon::Info)));
                true
            }
            PointerStatus::NotSymlink => {
                ui.println(format!(
                    "  {} {} is not a symlink (remove it, then run 'jdkenv use')",
                    ui.icon(Icon::Err),
                    link.display()
                ));
                false
            }
            PointerStatus::BrokenSymlink { target } => {
                ui.println(format!(
                    "  {} BROKEN symlink pointing to: {}",
                    ui.icon(Icon::Err),
                    target.display()
                ));
                false
            }
            PointerStatus::Symlink { target } => {
                ui.println(format!(
                    "  {} Symlink points to: {}",
                    ui.icon(Icon::Ok),
                    target.display()
                ));
                if let Some(when) = last_switched(config) {
                    ui.println(format!(
                        "  {} Last switched: {}",
                        ui.icon(Icon::Info),
                        when.format("%Y-%m-%d %H:%M:%S")
                    ));
                }
                match current_version(config) {
                    Ok(Some(version)) => {
                        ui.println(format!(
                            "  {} Active version: {}",
                            ui.icon(Icon::Ok),
                            ui.colored(version, AnsiColor::Green)
                        ));
                        true
                    }
                    Ok(None) => true,
                    Err(e) => {
                        ui.println(format!("  {} {}", ui.icon(Icon::Warn), e));
                        false
                    }
                }
            }
        }
    });

    // 3. Install roots
    check_step(ui, "Install Roots", || {
        let mut table = ui.table();
        table.set_header(vec![
            ui.header_cell("Root"),
            ui.header_cell("Status"),
            ui.header_cell("Versions"),
        ]);

        let mut total = 0;
        for root in config.layout.install_roots() {
            let (status, count) = match count_versions(config, root) {
                Ok(count) => {
                    total += count;
                    (format!("{} readable", ui.icon(Icon::Ok)), count.to_string())
                }
                Err(e) => (format!("{} {}", ui.icon(Icon::Warn), e), "-".to_string()),
            };
            table.add_row(vec![
                ui.cell(root.display().to_string()),
                ui.cell(status),
                ui.cell(count),
            ]);
        }

        ui.println(table.to_string());
        if total == 0 {
            ui.println(format!("  {} No versions installed", ui.icon(Icon::Warn)));
        }
        true
    });

    // 4. Environment
    check_step(ui, "Environment", || match env::var_os("JAVA_HOME") {
        Some(java_home) if Path::new(&java_home) == config.current_link => {
            ui.println(format!("  {} JAVA_HOME points at the current pointer", ui.icon(Icon::Ok)));
            true
        }
        Some(java_home) => {
            ui.println(format!(
                "  {} JAVA_HOME is {}, expected {}",
                ui.icon(Icon::Warn),
                Path::new(&java_home).display(),
                config.current_link.display()
            ));
            true
        }
        None => {
            ui.println(format!(
                "  {} JAVA_HOME not set (see 'jdkenv init')",
                ui.icon(Icon::Warn)
            ));
            true
        }
    });
}

fn count_versions(config: &Config, root: &Path) -> std::io::Result<usize> {
    let (_, names) = subdirectory_names(root)?;
    Ok(names
        .iter()
        .filter(|name| config.layout.accepts(name) && root.join(name) != config.current_link)
        .count())
}

fn check_step<F>(ui: &Ui, name: &str, check_fn: F)
where
    F: FnOnce() -> bool,
{
    ui.println(ui.bold(format!("Checking {}...", name)));
    if !check_fn() {
        ui.println(ui.colored("  Issues detected!", AnsiColor::Red));
    }
    ui.newline();
}
