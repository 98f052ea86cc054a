//! Control flow AST nodes for bJin.
//!
//! - If statements with optional else / else-if chains
//! - While loops
//! - For loops over lists

use bjin_core::Span;

use crate::ast::{Expression, Statement};

/// If statement. Without an alternate this is a short if.
#[derive(Debug, Clone, PartialEq)]
pub struct If {
    /// Must be a bool
    pub test: Expression,
    pub consequent: Vec<Statement>,
    pub alternate: Option<Alternate>,
    pub span: Span,
}

/// What follows `else`.
#[derive(Debug, Clone, PartialEq)]
pub enum Alternate {
    /// `else { ... }`
    Block(Vec<Statement>),
    /// `else if ...`
    If(Box<If>),
}

/// While loop: `while test { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct While {
    pub test: Expression,
    pub body: Vec<Statement>,
    pub span: Span,
}

/// For loop over a list: `for iterator in collection { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct For {
    /// Name bound to each element inside the body only
    pub iterator: String,
    pub collection: Expression,
    pub body: Vec<Statement>,
    pub span: Span,
}
