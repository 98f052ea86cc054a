//! The standard library catalog loaded into the root scope.

use bjin_core::types::{FunctionType, Type};
use std::sync::Arc;

use crate::entity::{Entity, Function, Variable};

/// Predeclared names: types, constants and functions.
///
/// A catalog is never mutated by analysis and can be shared between
/// analyzer runs on different threads.
#[derive(Debug, Clone, Default)]
pub struct Stdlib {
    entries: Vec<(String, Entity)>,
}

impl Stdlib {
    /// A catalog with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard bJin library.
    #[must_use]
    pub fn standard() -> Self {
        let float_to_float = || FunctionType::new(vec![Type::Float], Type::Float);
        let str_to_ints = || FunctionType::new(vec![Type::String], Type::list(Type::Int));

        Self::empty()
            .with_type("int", Type::Int)
            .with_type("float", Type::Float)
            .with_type("bool", Type::Bool)
            .with_type("str", Type::String)
            .with_type("void", Type::Void)
            .with_type("any", Type::Any)
            .with_constant("π", Type::Float)
            .with_function("print", FunctionType::new(vec![Type::Any], Type::Void))
            .with_function("sin", float_to_float())
            .with_function("cos", float_to_float())
            .with_function("exp", float_to_float())
            .with_function("ln", float_to_float())
            .with_function(
                "hypot",
                FunctionType::new(vec![Type::Float, Type::Float], Type::Float),
            )
            .with_function("bytes", str_to_ints())
            .with_function("codepoints", str_to_ints())
    }

    /// Adds an arbitrary entry.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, entity: Entity) -> Self {
        self.entries.push((name.into(), entity));
        self
    }

    #[must_use]
    pub fn with_type(self, name: &str, ty: Type) -> Self {
        self.with(name, Entity::Type(ty))
    }

    /// Adds a read-only variable.
    #[must_use]
    pub fn with_constant(self, name: &str, ty: Type) -> Self {
        self.with(name, Entity::Variable(Arc::new(Variable::new(name, true, ty))))
    }

    #[must_use]
    pub fn with_function(self, name: &str, ty: FunctionType) -> Self {
        self.with(name, Entity::Function(Arc::new(Function::new(name, ty))))
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Entity)> {
        self.entries.iter().map(|(name, entity)| (name.as_str(), entity))
    }

    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, entity)| entity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
