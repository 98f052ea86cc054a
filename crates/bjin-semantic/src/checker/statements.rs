//! Statement analysis.

use bjin_ast::{Expression, Statement};
use bjin_core::types::Type;
use bjin_core::{Error, Result, Span};
use std::sync::Arc;

use crate::checker::core::Analyzer;
use crate::checker::helpers::{
    expect_assignable, expect_integer, expect_variable, expect_writable, must,
};
use crate::entity::{Entity, Variable};
use crate::resolved;

impl Analyzer {
    /// Analyzes a statement.
    pub(crate) fn check_statement(&mut self, statement: &Statement) -> Result<resolved::Statement> {
        match statement {
            Statement::VariableDeclaration {
                name,
                read_only,
                initializer,
                span,
            } => self.check_variable_declaration(name, *read_only, initializer, *span),

            Statement::FunctionDeclaration(decl) => self.check_function(decl),

            Statement::Increment { target, span } => Ok(resolved::Statement::Increment(
                self.check_counter(target, *span)?,
            )),

            Statement::Decrement { target, span } => Ok(resolved::Statement::Decrement(
                self.check_counter(target, *span)?,
            )),

            Statement::Assignment {
                target,
                source,
                span,
            } => self.check_assignment(target, source, *span),

            Statement::Break { span } => {
                must(self.scopes.in_loop(), *span, || {
                    "Break can only appear in a loop".to_string()
                })?;
                Ok(resolved::Statement::Break)
            }

            Statement::Return { value, span } => self.check_return(value, *span),

            Statement::ShortReturn { span } => self.check_short_return(*span),

            Statement::If(if_stmt) => Ok(resolved::Statement::If(self.check_if(if_stmt)?)),

            Statement::While(while_loop) => self.check_while(while_loop),

            Statement::For(for_loop) => self.check_for(for_loop),

            Statement::Expression { expression, .. } => Ok(resolved::Statement::Expression(
                self.check_expression(expression)?,
            )),
        }
    }

    /// Declares a fresh variable typed from its initializer.
    fn check_variable_declaration(
        &mut self,
        name: &str,
        read_only: bool,
        initializer: &Expression,
        span: Span,
    ) -> Result<resolved::Statement> {
        let initializer = self.check_expression(initializer)?;
        let variable = Arc::new(Variable::new(name, read_only, initializer.ty.clone()));

        self.scopes
            .define(name, Entity::Variable(Arc::clone(&variable)))
            .map_err(|message| Error::SemanticWithSpan(message, span))?;

        Ok(resolved::Statement::VariableDeclaration {
            variable,
            initializer,
        })
    }

    /// Operand of `++` and `--`: a writable integer variable or list element.
    fn check_counter(&mut self, target: &Expression, span: Span) -> Result<resolved::Expression> {
        let target = self.check_expression(target)?;
        expect_integer(&target, span)?;
        expect_variable(&target, span)?;
        expect_writable(&target, span)?;
        Ok(target)
    }

    fn check_assignment(
        &mut self,
        target: &Expression,
        source: &Expression,
        span: Span,
    ) -> Result<resolved::Statement> {
        let source = self.check_expression(source)?;
        let target = self.check_expression(target)?;

        expect_assignable(&source.ty, &target.ty, span)?;
        expect_writable(&target, span)?;

        Ok(resolved::Statement::Assignment { target, source })
    }

    /// `return expr`: only in functions that declare a return type.
    fn check_return(&mut self, value: &Expression, span: Span) -> Result<resolved::Statement> {
        let return_type = self.enclosing_return_type(span)?;
        must(!return_type.is_void(), span, || {
            "Cannot return a value here".to_string()
        })?;

        let value = self.check_expression(value)?;
        expect_assignable(&value.ty, &return_type, span)?;
        Ok(resolved::Statement::Return(value))
    }

    /// `return` alone: only in functions without a return type.
    fn check_short_return(&mut self, span: Span) -> Result<resolved::Statement> {
        let return_type = self.enclosing_return_type(span)?;
        must(return_type.is_void(), span, || {
            "Something should be returned here".to_string()
        })?;
        Ok(resolved::Statement::ShortReturn)
    }

    fn enclosing_return_type(&self, span: Span) -> Result<Type> {
        self.scopes
            .current_function()
            .map(|function| (*function.ty.return_type).clone())
            .ok_or_else(|| {
                Error::SemanticWithSpan("Return can only appear in a function".to_string(), span)
            })
    }
}
