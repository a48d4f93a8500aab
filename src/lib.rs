//! Shared library for `StudyHub`
//! Contains the widget state machines used by the CLI

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::get_version;
