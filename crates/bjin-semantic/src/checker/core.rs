//! Core analyzer structure.

use bjin_core::{Error, Result};

use crate::scope::ScopeTree;
use crate::stdlib::Stdlib;

/// Resolves names and checks types for one program.
///
/// An analyzer owns the scope arena for a single run. It is cheap to create
/// and should not be reused across programs.
pub struct Analyzer {
    /// Scope arena for tracking declarations and control context
    pub(crate) scopes: ScopeTree,
}

impl Analyzer {
    /// Creates an analyzer whose root scope is empty.
    pub fn new() -> Self {
        Self {
            scopes: ScopeTree::new(),
        }
    }

    /// Creates an analyzer whose root scope holds every catalog entry.
    ///
    /// # Errors
    /// Returns a semantic error if the catalog declares a name twice.
    pub fn with_stdlib(stdlib: &Stdlib) -> Result<Self> {
        let mut analyzer = Self::new();
        for (name, entity) in stdlib.entries() {
            analyzer
                .scopes
                .define(name, entity.clone())
                .map_err(Error::Semantic)?;
        }
        Ok(analyzer)
    }

    /// Read access to the scope arena.
    pub fn scopes(&self) -> &ScopeTree {
        &self.scopes
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
