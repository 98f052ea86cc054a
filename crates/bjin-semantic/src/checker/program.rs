//! Program, block and function analysis.

use bjin_ast as ast;
use bjin_core::types::{FunctionType, Type};
use bjin_core::{Error, Result};
use std::sync::Arc;
use tracing::debug;

use crate::checker::core::Analyzer;
use crate::entity::{Entity, Function, Parameter};
use crate::resolved;
use crate::scope::{ScopeId, ScopeKind};

impl Analyzer {
    /// Analyzes a complete program.
    ///
    /// Top-level statements share the root scope with the library catalog,
    /// so a program cannot redeclare a library name at top level.
    pub fn analyze_program(&mut self, program: &ast::Program) -> Result<resolved::Program> {
        let statements = self.check_statements(&program.statements)?;
        Ok(resolved::Program { statements })
    }

    /// Analyzes statements in order in the current scope.
    pub(crate) fn check_statements(
        &mut self,
        statements: &[ast::Statement],
    ) -> Result<Vec<resolved::Statement>> {
        statements
            .iter()
            .map(|statement| self.check_statement(statement))
            .collect()
    }

    /// Analyzes statements in a fresh child scope of the given kind.
    pub(crate) fn check_block(
        &mut self,
        kind: ScopeKind,
        statements: &[ast::Statement],
    ) -> Result<Vec<resolved::Statement>> {
        self.scopes.enter_scope(kind);
        let result = self.check_statements(statements);
        self.scopes.exit_scope();
        result
    }

    /// Analyzes a function declaration.
    ///
    /// The function is declared in the enclosing scope after its parameters
    /// are known and before its body is analyzed, so the body may call it.
    pub(crate) fn check_function(
        &mut self,
        decl: &ast::FunctionDeclaration,
    ) -> Result<resolved::Statement> {
        let return_type = match &decl.return_type {
            Some(type_expr) => self.resolve_type(type_expr)?,
            None => Type::Void,
        };

        let enclosing = self.scopes.current();
        let body_scope = self.scopes.enter_scope(ScopeKind::FunctionBody);

        let result = self.check_function_in(decl, return_type, enclosing, body_scope);

        self.scopes.exit_scope();
        result
    }

    fn check_function_in(
        &mut self,
        decl: &ast::FunctionDeclaration,
        return_type: Type,
        enclosing: ScopeId,
        body_scope: ScopeId,
    ) -> Result<resolved::Statement> {
        let parameters = decl
            .parameters
            .iter()
            .map(|parameter| self.check_parameter(parameter))
            .collect::<Result<Vec<_>>>()?;

        let signature = FunctionType::new(
            parameters.iter().map(|p| p.ty.clone()).collect(),
            return_type,
        );
        let function = Arc::new(Function::new(decl.name.clone(), signature));
        debug!(name = %decl.name, ty = %function.ty, "declared function");

        self.scopes.set_function(body_scope, Arc::clone(&function));
        self.scopes
            .define_in(enclosing, &decl.name, Entity::Function(Arc::clone(&function)))
            .map_err(|message| Error::SemanticWithSpan(message, decl.span))?;

        let body = self.check_statements(&decl.body)?;
        Ok(resolved::Statement::FunctionDeclaration {
            function,
            parameters,
            body,
        })
    }

    /// Declares a parameter in the current (function body) scope.
    fn check_parameter(&mut self, parameter: &ast::Parameter) -> Result<Arc<Parameter>> {
        let ty = self.resolve_type(&parameter.type_annotation)?;
        let entity = Arc::new(Parameter {
            name: parameter.name.clone(),
            ty,
        });

        self.scopes
            .define(&parameter.name, Entity::Parameter(Arc::clone(&entity)))
            .map_err(|message| Error::SemanticWithSpan(message, parameter.span))?;
        Ok(entity)
    }
}
