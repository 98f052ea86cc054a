//! Core types and utilities for the bJin semantic analyzer.
//!
//! This crate provides the type system, source spans and the error type
//! shared by the syntax tree and the analyzer.

pub mod error;
pub mod span;
pub mod types;

pub use error::{Error, Result};
pub use span::{Location, Span};
pub use types::{FunctionType, Type};
