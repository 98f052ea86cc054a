//! Syntax tree for the bJin language.
//!
//! This crate holds the unresolved tree produced by the parser and consumed
//! by the semantic analyzer, plus the [`build`] helpers for assembling trees
//! by hand.

pub mod ast;
pub mod build;
pub mod control_flow;

pub use ast::{
    BinaryOperator, Expression, FunctionDeclaration, Parameter, Program, Statement, TypeExpr,
    UnaryOperator,
};
pub use control_flow::{Alternate, For, If, While};
