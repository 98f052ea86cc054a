//! Semantic analysis for bJin programs.
//!
//! This crate resolves every name in a syntax tree to the entity it denotes
//! and checks the program against the language's static rules. The result is
//! a [`resolved::Program`] in which each expression carries its type.

mod checker;
pub mod entity;
pub mod resolved;
pub mod scope;
pub mod stdlib;

pub use checker::Analyzer;
pub use entity::{Entity, Function, Parameter, Variable};
pub use scope::{Scope, ScopeId, ScopeKind, ScopeTree};
pub use stdlib::Stdlib;

use bjin_ast::Program;
use bjin_core::Result;
use bjin_utils::AnalysisConfig;
use tracing::{debug, warn};

/// Analyzes a program against the given library catalog.
///
/// Analysis stops at the first violation.
///
/// # Errors
/// Returns a semantic error for:
/// - Undeclared or redeclared identifiers
/// - Type mismatches in operators, assignments, calls and returns
/// - Writes to constants
/// - `break` or `return` outside their context
///
/// # Examples
/// ```
/// use bjin_ast::build::*;
/// use bjin_semantic::{analyze, Stdlib};
///
/// let tree = program(vec![let_var("x", int(1)), expr_stmt(call_named("print", vec![ident("x")]))]);
/// let resolved = analyze(&tree, &Stdlib::standard()).unwrap();
/// assert_eq!(resolved.statements.len(), 2);
/// ```
#[tracing::instrument(skip_all, fields(statements = program.statements.len()))]
pub fn analyze(program: &Program, stdlib: &Stdlib) -> Result<resolved::Program> {
    let mut analyzer = Analyzer::with_stdlib(stdlib)?;
    let result = analyzer.analyze_program(program);
    match &result {
        Ok(_) => debug!("analysis succeeded"),
        Err(err) => warn!(error = %err, "analysis failed"),
    }
    result
}

/// Analyzes a program using project settings.
///
/// With `prelude` disabled the catalog is not loaded, so even the built-in
/// type names are undeclared.
pub fn analyze_with_config(
    program: &Program,
    stdlib: &Stdlib,
    config: &AnalysisConfig,
) -> Result<resolved::Program> {
    if config.prelude {
        analyze(program, stdlib)
    } else {
        debug!("prelude disabled");
        analyze(program, &Stdlib::empty())
    }
}
