//! Lexical scopes for name resolution and control-context tracking.
//!
//! Scopes live in a flat arena and refer to their parent by index. Analysis
//! only ever opens a scope inside the current one and closes the innermost
//! scope first, so the arena behaves like a stack whose entries also carry
//! explicit parent links.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::entity::{Entity, Function};

/// Stable handle to a scope in a [`ScopeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

/// How a new scope derives its control context from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// Branch bodies: inherit everything.
    Block,
    /// Loop bodies: `break` becomes legal.
    Loop,
    /// Function bodies: `break` is illegal again, and the enclosing function
    /// is unset until [`ScopeTree::set_function`] is called.
    FunctionBody,
}

/// A single lexical scope.
#[derive(Debug)]
pub struct Scope {
    parent: Option<ScopeId>,
    locals: HashMap<String, Entity>,
    in_loop: bool,
    function: Option<Arc<Function>>,
}

impl Scope {
    /// Enclosing scope, `None` for the root.
    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Whether `name` is declared directly in this scope.
    pub fn declares(&self, name: &str) -> bool {
        self.locals.contains_key(name)
    }

    pub fn in_loop(&self) -> bool {
        self.in_loop
    }

    pub fn function(&self) -> Option<&Arc<Function>> {
        self.function.as_ref()
    }
}

/// Arena of nested scopes with the innermost one current.
#[derive(Debug)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
}

impl ScopeTree {
    /// Creates a tree holding only the root scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope {
                parent: None,
                locals: HashMap::new(),
                in_loop: false,
                function: None,
            }],
        }
    }

    /// The innermost open scope.
    pub fn current(&self) -> ScopeId {
        ScopeId(self.scopes.len() - 1)
    }

    pub fn get(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0]
    }

    /// Opens a child of the current scope and makes it current.
    pub fn enter_scope(&mut self, kind: ScopeKind) -> ScopeId {
        let parent = self.current();
        let (in_loop, function) = {
            let outer = self.get(parent);
            match kind {
                ScopeKind::Block => (outer.in_loop, outer.function.clone()),
                ScopeKind::Loop => (true, outer.function.clone()),
                ScopeKind::FunctionBody => (false, None),
            }
        };

        self.scopes.push(Scope {
            parent: Some(parent),
            locals: HashMap::new(),
            in_loop,
            function,
        });
        let id = self.current();
        debug!(scope = id.0, ?kind, "entered scope");
        id
    }

    /// Closes the current scope, discarding its bindings.
    ///
    /// # Panics
    /// Panics if attempting to exit the root scope.
    pub fn exit_scope(&mut self) {
        if self.scopes.len() <= 1 {
            panic!("Cannot exit the root scope");
        }
        self.scopes.pop();
        debug!(scope = self.scopes.len(), "exited scope");
    }

    /// Declares `name` in the current scope.
    ///
    /// # Returns
    /// * `Err` with the diagnostic message if the current scope already
    ///   declares `name`. Outer declarations may be shadowed.
    pub fn define(&mut self, name: &str, entity: Entity) -> Result<(), String> {
        self.define_in(self.current(), name, entity)
    }

    /// Declares `name` in a specific open scope.
    pub fn define_in(&mut self, id: ScopeId, name: &str, entity: Entity) -> Result<(), String> {
        let scope = &mut self.scopes[id.0];
        if scope.declares(name) {
            return Err(format!("Identifier {name} already declared"));
        }

        debug!(scope = id.0, name, ty = %entity.ty(), "declared");
        scope.locals.insert(name.to_string(), entity);
        Ok(())
    }

    /// Resolves `name`, searching from the current scope outward.
    pub fn lookup(&self, name: &str) -> Option<&Entity> {
        let mut next = Some(self.current());
        while let Some(id) = next {
            let scope = self.get(id);
            if let Some(entity) = scope.locals.get(name) {
                trace!(name, scope = id.0, "resolved");
                return Some(entity);
            }
            next = scope.parent;
        }
        None
    }

    /// Records the function whose body the scope `id` holds.
    pub fn set_function(&mut self, id: ScopeId, function: Arc<Function>) {
        self.scopes[id.0].function = Some(function);
    }

    /// Whether `break` is legal in the current scope.
    pub fn in_loop(&self) -> bool {
        self.get(self.current()).in_loop
    }

    /// The nearest enclosing function of the current scope.
    pub fn current_function(&self) -> Option<&Arc<Function>> {
        self.get(self.current()).function()
    }

    /// Nesting depth of the current scope (0 = root).
    pub fn depth(&self) -> usize {
        self.scopes.len() - 1
    }
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}
