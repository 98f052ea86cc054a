//! The resolved program produced by analysis.
//!
//! This tree mirrors the syntax tree with two differences: every name has
//! been replaced by the [`Entity`] it denotes, and every expression carries
//! its concrete [`Type`]. It is what code generation and optimization
//! consume.

use bjin_ast::{BinaryOperator, UnaryOperator};
use bjin_core::types::Type;
use std::sync::Arc;

use crate::entity::{Entity, Function, Parameter, Variable};

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VariableDeclaration {
        variable: Arc<Variable>,
        initializer: Expression,
    },

    FunctionDeclaration {
        function: Arc<Function>,
        parameters: Vec<Arc<Parameter>>,
        body: Vec<Statement>,
    },

    Increment(Expression),

    Decrement(Expression),

    Assignment {
        target: Expression,
        source: Expression,
    },

    Break,

    Return(Expression),

    ShortReturn,

    If(If),

    While {
        test: Expression,
        body: Vec<Statement>,
    },

    For {
        iterator: Arc<Variable>,
        collection: Expression,
        body: Vec<Statement>,
    },

    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub test: Expression,
    pub consequent: Vec<Statement>,
    pub alternate: Option<Alternate>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Alternate {
    Block(Vec<Statement>),
    If(Box<If>),
}

/// A typed expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionKind {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),

    /// A resolved name
    Entity(Entity),

    Conditional {
        test: Box<Expression>,
        consequent: Box<Expression>,
        alternate: Box<Expression>,
    },

    Or(Vec<Expression>),

    And(Vec<Expression>),

    Binary {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    Unary {
        operator: UnaryOperator,
        operand: Box<Expression>,
    },

    Subscript {
        list: Box<Expression>,
        index: Box<Expression>,
    },

    List(Vec<Expression>),

    EmptyList { base_type: Type },

    Call {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
}

impl Expression {
    #[must_use]
    pub fn new(kind: ExpressionKind, ty: Type) -> Self {
        Self { kind, ty }
    }

    /// The entity this expression names, if it is a bare reference.
    pub fn entity(&self) -> Option<&Entity> {
        match &self.kind {
            ExpressionKind::Entity(entity) => Some(entity),
            _ => None,
        }
    }
}
