//! Core module for the widget logic

pub mod config;
pub mod models;
pub mod selection;
pub mod theme;
pub mod timer;
pub mod wellness;

/// Returns the current version of the `StudyHub` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
