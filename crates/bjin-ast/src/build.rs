//! Helper functions for assembling syntax trees without a parser.
//!
//! Every node gets `Span::default()`. Hosts that embed the analyzer and the
//! test suites use these to describe programs directly.

use bjin_core::Span;

use crate::ast::{
    BinaryOperator, Expression, FunctionDeclaration, Parameter, Program, Statement, TypeExpr,
    UnaryOperator,
};
use crate::control_flow::{Alternate, For, If, While};

#[must_use]
pub fn program(statements: Vec<Statement>) -> Program {
    Program { statements }
}

// Types

#[must_use]
pub fn named_type(name: &str) -> TypeExpr {
    TypeExpr::Named {
        name: name.to_string(),
        span: Span::default(),
    }
}

#[must_use]
pub fn list_type(base: TypeExpr) -> TypeExpr {
    TypeExpr::List {
        base: Box::new(base),
        span: Span::default(),
    }
}

#[must_use]
pub fn function_type(parameters: Vec<TypeExpr>, return_type: TypeExpr) -> TypeExpr {
    TypeExpr::Function {
        parameters,
        return_type: Box::new(return_type),
        span: Span::default(),
    }
}

// Statements

/// `let name = initializer`
#[must_use]
pub fn let_var(name: &str, initializer: Expression) -> Statement {
    Statement::VariableDeclaration {
        name: name.to_string(),
        read_only: false,
        initializer,
        span: Span::default(),
    }
}

/// `const name = initializer`
#[must_use]
pub fn const_var(name: &str, initializer: Expression) -> Statement {
    Statement::VariableDeclaration {
        name: name.to_string(),
        read_only: true,
        initializer,
        span: Span::default(),
    }
}

#[must_use]
pub fn parameter(name: &str, type_annotation: TypeExpr) -> Parameter {
    Parameter {
        name: name.to_string(),
        type_annotation,
        span: Span::default(),
    }
}

#[must_use]
pub fn function(
    name: &str,
    parameters: Vec<Parameter>,
    return_type: Option<TypeExpr>,
    body: Vec<Statement>,
) -> Statement {
    Statement::FunctionDeclaration(FunctionDeclaration {
        name: name.to_string(),
        parameters,
        return_type,
        body,
        span: Span::default(),
    })
}

#[must_use]
pub fn increment(target: Expression) -> Statement {
    Statement::Increment {
        target,
        span: Span::default(),
    }
}

#[must_use]
pub fn decrement(target: Expression) -> Statement {
    Statement::Decrement {
        target,
        span: Span::default(),
    }
}

#[must_use]
pub fn assign(target: Expression, source: Expression) -> Statement {
    Statement::Assignment {
        target,
        source,
        span: Span::default(),
    }
}

#[must_use]
pub fn break_stmt() -> Statement {
    Statement::Break {
        span: Span::default(),
    }
}

#[must_use]
pub fn return_value(value: Expression) -> Statement {
    Statement::Return {
        value,
        span: Span::default(),
    }
}

#[must_use]
pub fn short_return() -> Statement {
    Statement::ShortReturn {
        span: Span::default(),
    }
}

#[must_use]
pub fn if_node(test: Expression, consequent: Vec<Statement>, alternate: Option<Alternate>) -> If {
    If {
        test,
        consequent,
        alternate,
        span: Span::default(),
    }
}

/// `if test { consequent } else { alternate }`
#[must_use]
pub fn if_else(test: Expression, consequent: Vec<Statement>, alternate: Vec<Statement>) -> Statement {
    Statement::If(if_node(test, consequent, Some(Alternate::Block(alternate))))
}

/// `if test { consequent } else if ...`
#[must_use]
pub fn if_else_if(test: Expression, consequent: Vec<Statement>, next: If) -> Statement {
    Statement::If(if_node(test, consequent, Some(Alternate::If(Box::new(next)))))
}

/// `if test { consequent }`
#[must_use]
pub fn short_if(test: Expression, consequent: Vec<Statement>) -> Statement {
    Statement::If(if_node(test, consequent, None))
}

#[must_use]
pub fn while_loop(test: Expression, body: Vec<Statement>) -> Statement {
    Statement::While(While {
        test,
        body,
        span: Span::default(),
    })
}

#[must_use]
pub fn for_loop(iterator: &str, collection: Expression, body: Vec<Statement>) -> Statement {
    Statement::For(For {
        iterator: iterator.to_string(),
        collection,
        body,
        span: Span::default(),
    })
}

#[must_use]
pub fn expr_stmt(expression: Expression) -> Statement {
    Statement::Expression {
        expression,
        span: Span::default(),
    }
}

// Expressions

#[must_use]
pub fn int(value: i64) -> Expression {
    Expression::Integer {
        value,
        span: Span::default(),
    }
}

#[must_use]
pub fn float(value: f64) -> Expression {
    Expression::Float {
        value,
        span: Span::default(),
    }
}

#[must_use]
pub fn boolean(value: bool) -> Expression {
    Expression::Boolean {
        value,
        span: Span::default(),
    }
}

#[must_use]
pub fn string(value: &str) -> Expression {
    Expression::String {
        value: value.to_string(),
        span: Span::default(),
    }
}

#[must_use]
pub fn ident(name: &str) -> Expression {
    Expression::Identifier {
        name: name.to_string(),
        span: Span::default(),
    }
}

#[must_use]
pub fn conditional(test: Expression, consequent: Expression, alternate: Expression) -> Expression {
    Expression::Conditional {
        test: Box::new(test),
        consequent: Box::new(consequent),
        alternate: Box::new(alternate),
        span: Span::default(),
    }
}

#[must_use]
pub fn or(operands: Vec<Expression>) -> Expression {
    Expression::Or {
        operands,
        span: Span::default(),
    }
}

#[must_use]
pub fn and(operands: Vec<Expression>) -> Expression {
    Expression::And {
        operands,
        span: Span::default(),
    }
}

#[must_use]
pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Expression {
    Expression::Binary {
        operator,
        left: Box::new(left),
        right: Box::new(right),
        span: Span::default(),
    }
}

#[must_use]
pub fn negate(operand: Expression) -> Expression {
    Expression::Unary {
        operator: UnaryOperator::Negate,
        operand: Box::new(operand),
        span: Span::default(),
    }
}

#[must_use]
pub fn not(operand: Expression) -> Expression {
    Expression::Unary {
        operator: UnaryOperator::Not,
        operand: Box::new(operand),
        span: Span::default(),
    }
}

#[must_use]
pub fn subscript(list: Expression, index: Expression) -> Expression {
    Expression::Subscript {
        list: Box::new(list),
        index: Box::new(index),
        span: Span::default(),
    }
}

#[must_use]
pub fn list(elements: Vec<Expression>) -> Expression {
    Expression::List {
        elements,
        span: Span::default(),
    }
}

#[must_use]
pub fn empty_list(base_type: TypeExpr) -> Expression {
    Expression::EmptyList {
        base_type,
        span: Span::default(),
    }
}

#[must_use]
pub fn call(callee: Expression, arguments: Vec<Expression>) -> Expression {
    Expression::Call {
        callee: Box::new(callee),
        arguments,
        span: Span::default(),
    }
}

/// `name(arguments...)`
#[must_use]
pub fn call_named(name: &str, arguments: Vec<Expression>) -> Expression {
    call(ident(name), arguments)
}
