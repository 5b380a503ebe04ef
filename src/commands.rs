//! High-level command orchestration for the CLI.
//!
//! Each function here corresponds to a subcommand in `main.rs`. They decide
//! how core results are shown: a missing version is printed and the command
//! still succeeds, while I/O and pointer-shape errors are returned so that
//! `main` exits with status 1.

use anyhow::{Context, Result};
use inquire::Select;
use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::config::Config;
use crate::current::{UNSET, current_version};
use crate::doctor::run_doctor;
use crate::resolve::resolve;
use crate::scan::list_versions;
use crate::switch::activate;
use crate::ui::Ui;

/// One-time setup of the store root plus shell instructions
pub fn init(config: &Config, ui: &Ui) -> Result<()> {
    config.ensure_store_root()?;

    if cfg!(windows) {
        let output = Command::new("setx")
            .arg("JAVA_HOME")
            .arg(&config.current_link)
            .output()
            .context("Failed to run setx")?;
        if !output.status.success() {
            anyhow::bail!(
                "setx exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        ui.println("please reboot command prompt to recognize JAVA_HOME");
        if has_git_bash(config) {
            ui.println("if you use git bash, write in your .bashrc below");
            shell_profile_lines(config)
                .iter()
                .for_each(|line| ui.println(line));
        }
    } else {
        ui.println("write in your .bashrc below");
        shell_profile_lines(config)
            .iter()
            .for_each(|line| ui.println(line));
    }

    Ok(())
}

/// Git Bash on Windows sets HOME to the profile directory
fn has_git_bash(config: &Config) -> bool {
    std::env::var_os("HOME").is_some_and(|home| Path::new(&home) == config.home_dir)
}

/// What the user should add to their shell profile
pub fn shell_profile_lines(config: &Config) -> Vec<String> {
    vec![
        format!("export JAVA_HOME={}", config.current_link.display()),
        "and execute below".to_string(),
        ". ~/.bashrc".to_string(),
    ]
}

/// Render installed versions, marking the active one with `* `
pub fn list_lines(versions: &[String], current: Option<&str>) -> Vec<String> {
    versions
        .iter()
        .map(|v| {
            if Some(v.as_str()) == current {
                format!("* {}", v)
            } else {
                format!("  {}", v)
            }
        })
        .collect()
}

/// List installed versions
pub fn list(config: &Config, ui: &Ui) -> Result<()> {
    let scan = list_versions(config);
    for issue in &scan.issues {
        ui.println(issue.to_string());
    }

    let current = current_version(config)?;
    for line in list_lines(&scan.versions, current.as_deref()) {
        ui.println(line);
    }

    Ok(())
}

/// Resolve a (possibly partial) name and make it the active version
pub fn use_version(config: &Config, name: Option<&str>, ui: &Ui) -> Result<()> {
    let scan = list_versions(config);
    for issue in &scan.issues {
        debug!("{}", issue);
    }

    let query = match name {
        Some(name) => name.to_string(),
        None if ui.interactive && !scan.is_empty() => {
            Select::new("Which JDK should be active?", scan.versions.clone())
                .prompt()
                .context("Version selection cancelled")?
        }
        None => {
            ui.println("please select jdk directory");
            return Ok(());
        }
    };

    let resolution = resolve(&query, &scan.versions);
    let version = resolution.version_id().to_string();

    let spinner = ui.spinner(format!("Switching to {}...", version));
    match activate(config, &version) {
        Ok(_) => {
            ui.spinner_finish(&spinner, format!("Now using {}", version));
            Ok(())
        }
        Err(e) if e.is_soft() => {
            ui.spinner_finish(&spinner, e.to_string());
            let candidates = resolution.candidates();
            if !candidates.is_empty() {
                ui.warn(format!("'{}' matches more than one version:", query));
                for candidate in candidates {
                    ui.println(format!("  {}", candidate));
                }
            }
            Ok(())
        }
        Err(e) => {
            spinner.finish_and_clear();
            Err(e).with_context(|| format!("Failed to switch to {}", version))
        }
    }
}

/// Print the active version
pub fn current(config: &Config, ui: &Ui) -> Result<()> {
    let version = current_version(config)?;
    ui.println(version.as_deref().unwrap_or(UNSET));
    Ok(())
}

/// Run diagnostics
pub fn doctor(config: &Config, ui: &Ui) -> Result<()> {
    run_doctor(config, ui);
    Ok(())
}
