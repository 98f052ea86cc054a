//! Resolution of type expressions written in source.

use bjin_ast::TypeExpr;
use bjin_core::types::Type;
use bjin_core::{Error, Result, Span};

use crate::checker::core::Analyzer;
use crate::entity::Entity;

impl Analyzer {
    /// Resolves a type expression to a type value.
    ///
    /// Names are looked up like identifiers and must denote a type.
    pub(crate) fn resolve_type(&self, type_expr: &TypeExpr) -> Result<Type> {
        match type_expr {
            TypeExpr::Named { name, span } => match self.lookup(name, *span)? {
                Entity::Type(ty) => Ok(ty.clone()),
                _ => Err(Error::SemanticWithSpan("Type expected".to_string(), *span)),
            },

            TypeExpr::List { base, .. } => Ok(Type::list(self.resolve_type(base)?)),

            TypeExpr::Function {
                parameters,
                return_type,
                ..
            } => {
                let parameters = parameters
                    .iter()
                    .map(|parameter| self.resolve_type(parameter))
                    .collect::<Result<Vec<_>>>()?;
                let return_type = self.resolve_type(return_type)?;
                Ok(Type::function(parameters, return_type))
            }
        }
    }

    /// Looks up `name`, failing if it is not declared in any open scope.
    pub(crate) fn lookup(&self, name: &str, span: Span) -> Result<&Entity> {
        self.scopes.lookup(name).ok_or_else(|| {
            Error::SemanticWithSpan(format!("Identifier {name} not declared"), span)
        })
    }
}
