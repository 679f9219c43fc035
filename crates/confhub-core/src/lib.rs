//! Core configuration and utilities shared by the confhub crates.
//!
//! ## Modules
//!
//! - `config`: Layered TOML configuration (defaults, global, repo)
//! - `logging`: tracing subscriber setup for the CLI

pub mod config;
pub mod logging;

pub use config::{Config, DiffConfig, ParamsConfig};
