//! Analysis implementation modules.

mod control_flow;
mod core;
mod expressions;
mod helpers;
mod program;
mod statements;
mod types;

pub use core::Analyzer;
