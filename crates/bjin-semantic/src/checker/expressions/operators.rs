//! Binary and unary operator checking.

use bjin_ast::{BinaryOperator, Expression, UnaryOperator};
use bjin_core::types::Type;
use bjin_core::{Result, Span};

use crate::checker::core::Analyzer;
use crate::checker::helpers::{
    expect_boolean, expect_numeric, expect_numeric_or_string, expect_same_type,
};
use crate::resolved::{self, ExpressionKind};

impl Analyzer {
    /// Checks a binary operation.
    ///
    /// The left operand decides which family of operands is acceptable; the
    /// right operand must then have exactly the same type.
    pub(super) fn check_binary_op(
        &mut self,
        operator: BinaryOperator,
        left: &Expression,
        right: &Expression,
        span: Span,
    ) -> Result<resolved::Expression> {
        let left = self.check_expression(left)?;
        let right = self.check_expression(right)?;

        let ty = match operator {
            BinaryOperator::Add => {
                expect_numeric_or_string(&left, span)?;
                expect_same_type(&left, &right, span)?;
                left.ty.clone()
            }

            BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide
            | BinaryOperator::Modulo
            | BinaryOperator::Power => {
                expect_numeric(&left, span)?;
                expect_same_type(&left, &right, span)?;
                left.ty.clone()
            }

            // Strings order byte-wise.
            BinaryOperator::Less
            | BinaryOperator::LessEqual
            | BinaryOperator::Greater
            | BinaryOperator::GreaterEqual => {
                expect_numeric_or_string(&left, span)?;
                expect_same_type(&left, &right, span)?;
                Type::Bool
            }

            BinaryOperator::Equal | BinaryOperator::NotEqual => {
                expect_same_type(&left, &right, span)?;
                Type::Bool
            }
        };

        Ok(resolved::Expression::new(
            ExpressionKind::Binary {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            },
            ty,
        ))
    }

    /// Checks a unary operation.
    pub(super) fn check_unary_op(
        &mut self,
        operator: UnaryOperator,
        operand: &Expression,
        span: Span,
    ) -> Result<resolved::Expression> {
        let operand = self.check_expression(operand)?;

        let ty = match operator {
            UnaryOperator::Negate => {
                expect_numeric(&operand, span)?;
                operand.ty.clone()
            }
            UnaryOperator::Not => {
                expect_boolean(&operand, span)?;
                Type::Bool
            }
        };

        Ok(resolved::Expression::new(
            ExpressionKind::Unary {
                operator,
                operand: Box::new(operand),
            },
            ty,
        ))
    }
}
