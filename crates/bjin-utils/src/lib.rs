//! Shared utilities for bJin tooling.

pub mod config;

pub use config::{AnalysisConfig, Config, Package};
