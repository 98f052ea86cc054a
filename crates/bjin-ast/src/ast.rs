//! Abstract Syntax Tree definitions for bJin.
//!
//! This is the unresolved tree handed over by the parser: names are plain
//! strings and no node carries a type yet.

use bjin_core::Span;

use crate::control_flow::{For, If, While};

/// A complete bJin program.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

/// Function declaration: `func name(params): type { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub parameters: Vec<Parameter>,
    /// Absent when the function returns nothing
    pub return_type: Option<TypeExpr>,
    pub body: Vec<Statement>,
    pub span: Span,
}

/// Function parameter: `name: type`
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub type_annotation: TypeExpr,
    pub span: Span,
}

/// A type written in source.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    /// A type name such as `int`, resolved through scope lookup
    Named { name: String, span: Span },

    /// `[base]`
    List { base: Box<TypeExpr>, span: Span },

    /// `(params)->return_type`
    Function {
        parameters: Vec<TypeExpr>,
        return_type: Box<TypeExpr>,
        span: Span,
    },
}

impl TypeExpr {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Named { span, .. } | Self::List { span, .. } | Self::Function { span, .. } => {
                *span
            }
        }
    }
}

/// Statements in bJin.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let name = expr` or `const name = expr`
    VariableDeclaration {
        name: String,
        read_only: bool,
        initializer: Expression,
        span: Span,
    },

    FunctionDeclaration(FunctionDeclaration),

    /// `target++`
    Increment { target: Expression, span: Span },

    /// `target--`
    Decrement { target: Expression, span: Span },

    /// `target = source`
    Assignment {
        target: Expression,
        source: Expression,
        span: Span,
    },

    Break { span: Span },

    /// `return expr`
    Return { value: Expression, span: Span },

    /// `return` with no value
    ShortReturn { span: Span },

    If(If),

    While(While),

    For(For),

    /// Expression statement, in practice a call
    Expression { expression: Expression, span: Span },
}

impl Statement {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::VariableDeclaration { span, .. }
            | Self::Increment { span, .. }
            | Self::Decrement { span, .. }
            | Self::Assignment { span, .. }
            | Self::Break { span }
            | Self::Return { span, .. }
            | Self::ShortReturn { span }
            | Self::Expression { span, .. } => *span,
            Self::FunctionDeclaration(decl) => decl.span,
            Self::If(stmt) => stmt.span,
            Self::While(stmt) => stmt.span,
            Self::For(stmt) => stmt.span,
        }
    }
}

/// Expressions in bJin.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Integer { value: i64, span: Span },

    Float { value: f64, span: Span },

    Boolean { value: bool, span: Span },

    String { value: String, span: Span },

    /// A name reference, replaced by its declaration during analysis
    Identifier { name: String, span: Span },

    /// `test ? consequent : alternate`
    Conditional {
        test: Box<Expression>,
        consequent: Box<Expression>,
        alternate: Box<Expression>,
        span: Span,
    },

    /// `a || b || c`
    Or { operands: Vec<Expression>, span: Span },

    /// `a && b && c`
    And { operands: Vec<Expression>, span: Span },

    Binary {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
        span: Span,
    },

    Unary {
        operator: UnaryOperator,
        operand: Box<Expression>,
        span: Span,
    },

    /// `list[index]`
    Subscript {
        list: Box<Expression>,
        index: Box<Expression>,
        span: Span,
    },

    /// `[a, b, c]`
    List { elements: Vec<Expression>, span: Span },

    /// `[](of type)`
    EmptyList { base_type: TypeExpr, span: Span },

    /// `callee(arguments...)`
    Call {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
        span: Span,
    },
}

impl Expression {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Integer { span, .. }
            | Self::Float { span, .. }
            | Self::Boolean { span, .. }
            | Self::String { span, .. }
            | Self::Identifier { span, .. }
            | Self::Conditional { span, .. }
            | Self::Or { span, .. }
            | Self::And { span, .. }
            | Self::Binary { span, .. }
            | Self::Unary { span, .. }
            | Self::Subscript { span, .. }
            | Self::List { span, .. }
            | Self::EmptyList { span, .. }
            | Self::Call { span, .. } => *span,
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,

    // Ordering
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Equality
    Equal,
    NotEqual,
}

impl BinaryOperator {
    /// Source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Power => "**",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
    Not,
}
