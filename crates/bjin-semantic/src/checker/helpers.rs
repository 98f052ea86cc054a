//! Assertions shared by the statement and expression checks.
//!
//! Each helper either succeeds or produces the diagnostic for the rule it
//! enforces, located at the given span.

use bjin_core::types::{FunctionType, Type};
use bjin_core::{Error, Result, Span};

use crate::entity::Entity;
use crate::resolved::{Expression, ExpressionKind};

/// Fails with `message` at `span` unless `condition` holds.
pub(crate) fn must(condition: bool, span: Span, message: impl FnOnce() -> String) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::SemanticWithSpan(message(), span))
    }
}

pub(crate) fn expect_numeric(expr: &Expression, span: Span) -> Result<()> {
    must(expr.ty.is_numeric(), span, || {
        format!("Expected a number, found {}", expr.ty)
    })
}

pub(crate) fn expect_numeric_or_string(expr: &Expression, span: Span) -> Result<()> {
    must(expr.ty.is_numeric_or_string(), span, || {
        format!("Expected a number or string, found {}", expr.ty)
    })
}

pub(crate) fn expect_boolean(expr: &Expression, span: Span) -> Result<()> {
    must(expr.ty == Type::Bool, span, || {
        format!("Expected a bool, found {}", expr.ty)
    })
}

pub(crate) fn expect_integer(expr: &Expression, span: Span) -> Result<()> {
    must(expr.ty == Type::Int, span, || {
        format!("Expected an integer, found {}", expr.ty)
    })
}

/// Returns the element type of a list-typed expression.
pub(crate) fn expect_list(expr: &Expression, span: Span) -> Result<Type> {
    expr.ty
        .list_base()
        .cloned()
        .ok_or_else(|| Error::SemanticWithSpan("List expected".to_string(), span))
}

pub(crate) fn expect_same_type(left: &Expression, right: &Expression, span: Span) -> Result<()> {
    must(left.ty.is_same_type(&right.ty), span, || {
        "Operands do not have the same type".to_string()
    })
}

pub(crate) fn expect_all_same_type(elements: &[Expression], span: Span) -> Result<()> {
    let Some((first, rest)) = elements.split_first() else {
        return Ok(());
    };
    must(
        rest.iter().all(|element| element.ty.is_same_type(&first.ty)),
        span,
        || "Not all elements have the same type".to_string(),
    )
}

pub(crate) fn expect_assignable(source: &Type, target: &Type, span: Span) -> Result<()> {
    must(source.can_assign_to(target), span, || {
        format!("Cannot assign a {source} to a {target}")
    })
}

/// Operand of `++`/`--`: a variable, a parameter or a list element.
pub(crate) fn expect_variable(target: &Expression, span: Span) -> Result<()> {
    let is_variable = matches!(
        &target.kind,
        ExpressionKind::Entity(Entity::Variable(_) | Entity::Parameter(_))
            | ExpressionKind::Subscript { .. }
    );
    must(is_variable, span, || "Variable expected".to_string())
}

/// Rejects writes to constants.
pub(crate) fn expect_writable(target: &Expression, span: Span) -> Result<()> {
    match target.entity() {
        Some(entity) if entity.is_read_only() => Err(Error::SemanticWithSpan(
            format!("Cannot assign to constant {}", entity.name()),
            span,
        )),
        _ => Ok(()),
    }
}

/// Returns the signature of a callable expression.
pub(crate) fn expect_callable(callee: &Expression, span: Span) -> Result<FunctionType> {
    callee.ty.as_function().cloned().ok_or_else(|| {
        Error::SemanticWithSpan("Call of non-function or non-constructor".to_string(), span)
    })
}

/// Checks arity first, then each argument against its parameter.
pub(crate) fn expect_arguments_match(
    arguments: &[Expression],
    signature: &FunctionType,
    span: Span,
) -> Result<()> {
    let required = signature.parameters.len();
    must(arguments.len() == required, span, || {
        format!(
            "{required} argument(s) required but {} passed",
            arguments.len()
        )
    })?;

    for (argument, parameter) in arguments.iter().zip(&signature.parameters) {
        expect_assignable(&argument.ty, parameter, span)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Variable;
    use std::sync::Arc;

    fn typed(ty: Type) -> Expression {
        Expression::new(ExpressionKind::Integer(0), ty)
    }

    #[test]
    fn test_assignability_message() {
        let err = expect_assignable(&Type::Bool, &Type::Int, Span::default()).unwrap_err();
        assert_eq!(err.message(), "Cannot assign a bool to a int");
    }

    #[test]
    fn test_all_same_type_accepts_empty_and_uniform() {
        assert!(expect_all_same_type(&[], Span::default()).is_ok());
        assert!(expect_all_same_type(&[typed(Type::Int), typed(Type::Int)], Span::default()).is_ok());
        assert!(
            expect_all_same_type(&[typed(Type::Int), typed(Type::Float)], Span::default()).is_err()
        );
    }

    #[test]
    fn test_argument_count_message() {
        let signature = FunctionType::new(vec![Type::Int], Type::Void);
        let err = expect_arguments_match(
            &[typed(Type::Int), typed(Type::Int)],
            &signature,
            Span::default(),
        )
        .unwrap_err();
        assert_eq!(err.message(), "1 argument(s) required but 2 passed");
    }

    #[test]
    fn test_expect_list_returns_base() {
        let base = expect_list(&typed(Type::list(Type::String)), Span::default()).unwrap();
        assert_eq!(base, Type::String);
        assert!(expect_list(&typed(Type::Int), Span::default()).is_err());
    }

    #[test]
    fn test_counter_operand_must_be_a_variable() {
        let variable = Expression::new(
            ExpressionKind::Entity(Entity::Variable(Arc::new(Variable::new("n", false, Type::Int)))),
            Type::Int,
        );
        assert!(expect_variable(&variable, Span::default()).is_ok());

        let err = expect_variable(&typed(Type::Int), Span::default()).unwrap_err();
        assert_eq!(err.message(), "Variable expected");
    }
}
