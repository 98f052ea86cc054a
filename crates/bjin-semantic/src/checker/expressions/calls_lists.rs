//! Calls, list literals and subscripts.

use bjin_ast::Expression;
use bjin_core::types::Type;
use bjin_core::{Error, Result, Span};

use crate::checker::core::Analyzer;
use crate::checker::helpers::{
    expect_all_same_type, expect_arguments_match, expect_callable, expect_integer, expect_list,
};
use crate::resolved::{self, ExpressionKind};

impl Analyzer {
    /// Checks a call.
    ///
    /// Anything with a function type can be called, including variables and
    /// parameters that hold functions.
    pub(super) fn check_call(
        &mut self,
        callee: &Expression,
        arguments: &[Expression],
        span: Span,
    ) -> Result<resolved::Expression> {
        let callee = self.check_expression(callee)?;
        let signature = expect_callable(&callee, span)?;

        let arguments = arguments
            .iter()
            .map(|argument| self.check_expression(argument))
            .collect::<Result<Vec<_>>>()?;
        expect_arguments_match(&arguments, &signature, span)?;

        Ok(resolved::Expression::new(
            ExpressionKind::Call {
                callee: Box::new(callee),
                arguments,
            },
            *signature.return_type,
        ))
    }

    /// Checks a list literal. Elements must all share one exact type.
    pub(super) fn check_list(
        &mut self,
        elements: &[Expression],
        span: Span,
    ) -> Result<resolved::Expression> {
        let elements = elements
            .iter()
            .map(|element| self.check_expression(element))
            .collect::<Result<Vec<_>>>()?;

        let Some(first) = elements.first() else {
            return Err(Error::SemanticWithSpan(
                "Cannot infer the type of an empty list".to_string(),
                span,
            ));
        };
        expect_all_same_type(&elements, span)?;

        let ty = Type::list(first.ty.clone());
        Ok(resolved::Expression::new(ExpressionKind::List(elements), ty))
    }

    /// Checks `list[index]`; the result has the list's element type.
    pub(super) fn check_subscript(
        &mut self,
        list: &Expression,
        index: &Expression,
    ) -> Result<resolved::Expression> {
        let list_span = list.span();
        let index_span = index.span();

        let list = self.check_expression(list)?;
        let element_type = expect_list(&list, list_span)?;

        let index = self.check_expression(index)?;
        expect_integer(&index, index_span)?;

        Ok(resolved::Expression::new(
            ExpressionKind::Subscript {
                list: Box::new(list),
                index: Box::new(index),
            },
            element_type,
        ))
    }
}
