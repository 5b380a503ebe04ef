pub mod commands;
pub mod config;
pub mod current;
pub mod doctor;
pub mod error;
pub mod fs_utils;
pub mod layout;
pub mod logging;
pub mod resolve;
pub mod scan;
pub mod switch;
pub mod ui;

pub use config::Config;
pub use error::{Error, Result};

#[cfg(test)]
pub mod test_utils;
