//! CLI command implementations
//!
//! This module contains the flag handling and the config generation command.

pub mod create_config;
pub mod flags;
