//! Control flow analysis (if, while, for).

use bjin_ast::{Alternate, For, If, While};
use bjin_core::{Error, Result};
use std::sync::Arc;

use crate::checker::core::Analyzer;
use crate::checker::helpers::{expect_boolean, expect_list};
use crate::entity::{Entity, Variable};
use crate::resolved;
use crate::scope::ScopeKind;

impl Analyzer {
    /// Checks an if statement. Each branch body gets its own scope; an
    /// else-if continues in the current one.
    pub(crate) fn check_if(&mut self, if_stmt: &If) -> Result<resolved::If> {
        let test = self.check_expression(&if_stmt.test)?;
        expect_boolean(&test, if_stmt.test.span())?;

        let consequent = self.check_block(ScopeKind::Block, &if_stmt.consequent)?;

        let alternate = match &if_stmt.alternate {
            None => None,
            Some(Alternate::Block(statements)) => Some(resolved::Alternate::Block(
                self.check_block(ScopeKind::Block, statements)?,
            )),
            Some(Alternate::If(next)) => {
                Some(resolved::Alternate::If(Box::new(self.check_if(next)?)))
            }
        };

        Ok(resolved::If {
            test,
            consequent,
            alternate,
        })
    }

    pub(crate) fn check_while(&mut self, while_loop: &While) -> Result<resolved::Statement> {
        let test = self.check_expression(&while_loop.test)?;
        expect_boolean(&test, while_loop.test.span())?;

        let body = self.check_block(ScopeKind::Loop, &while_loop.body)?;
        Ok(resolved::Statement::While { test, body })
    }

    /// Checks a for loop. The iterator is a constant typed as the list's
    /// element type and is visible only inside the body.
    pub(crate) fn check_for(&mut self, for_loop: &For) -> Result<resolved::Statement> {
        let collection = self.check_expression(&for_loop.collection)?;
        let element_type = expect_list(&collection, for_loop.collection.span())?;

        let iterator = Arc::new(Variable::new(
            for_loop.iterator.clone(),
            true,
            element_type,
        ));

        self.scopes.enter_scope(ScopeKind::Loop);
        let body = self
            .scopes
            .define(&for_loop.iterator, Entity::Variable(Arc::clone(&iterator)))
            .map_err(|message| Error::SemanticWithSpan(message, for_loop.span))
            .and_then(|()| self.check_statements(&for_loop.body));
        self.scopes.exit_scope();

        Ok(resolved::Statement::For {
            iterator,
            collection,
            body: body?,
        })
    }
}
