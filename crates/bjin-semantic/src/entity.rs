//! Declaration entities created during analysis.
//!
//! Each declaration produces exactly one entity, shared through `Arc` by
//! every reference that resolves to it. Two references denote the same
//! declaration exactly when [`Entity::is`] holds.

use bjin_core::types::{FunctionType, Type};
use std::fmt;
use std::sync::Arc;

/// A `let`/`const` binding, a loop iterator, or a library constant.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub read_only: bool,
    pub ty: Type,
}

impl Variable {
    #[must_use]
    pub fn new(name: impl Into<String>, read_only: bool, ty: Type) -> Self {
        Self {
            name: name.into(),
            read_only,
            ty,
        }
    }
}

/// A declared or library function.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub ty: FunctionType,
}

impl Function {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: FunctionType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A function parameter. Parameters are assignable inside their function.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: Type,
}

/// Anything a name can resolve to.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Variable(Arc<Variable>),
    Function(Arc<Function>),
    Parameter(Arc<Parameter>),
    /// A type value such as `int`
    Type(Type),
}

impl Entity {
    /// Type of the entity when used as a value.
    #[must_use]
    pub fn ty(&self) -> Type {
        match self {
            Self::Variable(variable) => variable.ty.clone(),
            Self::Function(function) => Type::Function(function.ty.clone()),
            Self::Parameter(parameter) => parameter.ty.clone(),
            Self::Type(_) => Type::Type,
        }
    }

    /// Declared name, or the type's spelling for type values.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Variable(variable) => variable.name.clone(),
            Self::Function(function) => function.name.clone(),
            Self::Parameter(parameter) => parameter.name.clone(),
            Self::Type(ty) => ty.to_string(),
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::Variable(variable) if variable.read_only)
    }

    /// Identity comparison: true when both denote the same declaration.
    #[must_use]
    pub fn is(&self, other: &Entity) -> bool {
        match (self, other) {
            (Self::Variable(a), Self::Variable(b)) => Arc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Arc::ptr_eq(a, b),
            (Self::Parameter(a), Self::Parameter(b)) => Arc::ptr_eq(a, b),
            (Self::Type(a), Self::Type(b)) => a.is_same_type(b),
            _ => false,
        }
    }

    pub fn as_variable(&self) -> Option<&Arc<Variable>> {
        match self {
            Self::Variable(variable) => Some(variable),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Arc<Function>> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(ty) => write!(f, "{ty}"),
            _ => write!(f, "{}: {}", self.name(), self.ty()),
        }
    }
}
