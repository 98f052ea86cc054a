//! Expression analysis.

mod calls_lists;
mod operators;

use bjin_ast::Expression;
use bjin_core::types::Type;
use bjin_core::{Result, Span};

use crate::checker::core::Analyzer;
use crate::checker::helpers::{expect_boolean, expect_same_type};
use crate::resolved::{self, ExpressionKind};

impl Analyzer {
    /// Analyzes an expression, producing its typed, resolved form.
    pub(crate) fn check_expression(&mut self, expr: &Expression) -> Result<resolved::Expression> {
        match expr {
            Expression::Integer { value, .. } => Ok(typed(ExpressionKind::Integer(*value), Type::Int)),
            Expression::Float { value, .. } => Ok(typed(ExpressionKind::Float(*value), Type::Float)),
            Expression::Boolean { value, .. } => {
                Ok(typed(ExpressionKind::Boolean(*value), Type::Bool))
            }
            Expression::String { value, .. } => {
                Ok(typed(ExpressionKind::String(value.clone()), Type::String))
            }

            Expression::Identifier { name, span } => {
                let entity = self.lookup(name, *span)?.clone();
                let ty = entity.ty();
                Ok(typed(ExpressionKind::Entity(entity), ty))
            }

            Expression::Conditional {
                test,
                consequent,
                alternate,
                span,
            } => self.check_conditional(test, consequent, alternate, *span),

            Expression::Or { operands, .. } => {
                let operands = self.check_logical_operands(operands)?;
                Ok(typed(ExpressionKind::Or(operands), Type::Bool))
            }

            Expression::And { operands, .. } => {
                let operands = self.check_logical_operands(operands)?;
                Ok(typed(ExpressionKind::And(operands), Type::Bool))
            }

            Expression::Binary {
                operator,
                left,
                right,
                span,
            } => self.check_binary_op(*operator, left, right, *span),

            Expression::Unary {
                operator,
                operand,
                span,
            } => self.check_unary_op(*operator, operand, *span),

            Expression::Subscript { list, index, .. } => self.check_subscript(list, index),

            Expression::List { elements, span } => self.check_list(elements, *span),

            Expression::EmptyList { base_type, .. } => {
                let base_type = self.resolve_type(base_type)?;
                let ty = Type::list(base_type.clone());
                Ok(typed(ExpressionKind::EmptyList { base_type }, ty))
            }

            Expression::Call {
                callee,
                arguments,
                span,
            } => self.check_call(callee, arguments, *span),
        }
    }

    /// `test ? consequent : alternate`; both arms must have the same type.
    fn check_conditional(
        &mut self,
        test: &Expression,
        consequent: &Expression,
        alternate: &Expression,
        span: Span,
    ) -> Result<resolved::Expression> {
        let test_expr = self.check_expression(test)?;
        expect_boolean(&test_expr, test.span())?;

        let consequent = self.check_expression(consequent)?;
        let alternate = self.check_expression(alternate)?;
        expect_same_type(&consequent, &alternate, span)?;

        let ty = consequent.ty.clone();
        Ok(typed(
            ExpressionKind::Conditional {
                test: Box::new(test_expr),
                consequent: Box::new(consequent),
                alternate: Box::new(alternate),
            },
            ty,
        ))
    }

    /// Operands of `||` and `&&`: every one a bool.
    fn check_logical_operands(&mut self, operands: &[Expression]) -> Result<Vec<resolved::Expression>> {
        let checked = operands
            .iter()
            .map(|operand| self.check_expression(operand))
            .collect::<Result<Vec<_>>>()?;

        for (operand, syntax) in checked.iter().zip(operands) {
            expect_boolean(operand, syntax.span())?;
        }
        Ok(checked)
    }
}

fn typed(kind: ExpressionKind, ty: Type) -> resolved::Expression {
    resolved::Expression::new(kind, ty)
}
