//! Common test utilities for semantic analysis tests.
#![allow(dead_code)]

use bjin_ast::build::{call_named, expr_stmt, program};
use bjin_ast::{Expression, Statement};
use bjin_core::Result;
use bjin_semantic::{analyze, resolved, Stdlib};

/// Analyzes statements as a whole program against the standard catalog.
pub fn analyze_statements(statements: Vec<Statement>) -> Result<resolved::Program> {
    analyze(&program(statements), &Stdlib::standard())
}

/// Analyzes statements that must be accepted.
pub fn resolve(statements: Vec<Statement>) -> resolved::Program {
    match analyze_statements(statements) {
        Ok(resolved) => resolved,
        Err(err) => panic!("expected analysis to succeed, got: {err}"),
    }
}

/// Analyzes statements that must be rejected and returns the diagnostic text.
pub fn error_of(statements: Vec<Statement>) -> String {
    match analyze_statements(statements) {
        Ok(_) => panic!("expected analysis to fail"),
        Err(err) => err.message().to_string(),
    }
}

pub fn should_pass(statements: Vec<Statement>) -> bool {
    analyze_statements(statements).is_ok()
}

pub fn should_fail(statements: Vec<Statement>) -> bool {
    analyze_statements(statements).is_err()
}

/// `print(expr);`
pub fn print(expr: Expression) -> Statement {
    expr_stmt(call_named("print", vec![expr]))
}
