//! The bJin type system.
//!
//! Types are plain immutable values. Primitives compare by variant, list
//! types compare structurally, and function types are related through
//! assignability (covariant in the return type, contravariant in the
//! parameters). Every predicate here is total and terminates on the nesting
//! depth of its operands.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bJin type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Type {
    /// `bool`
    Bool,
    /// `int`
    Int,
    /// `float`
    Float,
    /// `str`
    String,
    /// `void`, the return type of functions that produce nothing
    Void,
    /// `type`, the type of type values such as `int` used as expressions
    Type,
    /// `any`, accepts values of every type
    Any,
    /// `[T]`
    List(Box<Type>),
    /// `(P1,P2)->R`
    Function(FunctionType),
}

/// Signature of a callable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionType {
    pub parameters: Vec<Type>,
    pub return_type: Box<Type>,
}

impl FunctionType {
    #[must_use]
    pub fn new(parameters: Vec<Type>, return_type: Type) -> Self {
        Self {
            parameters,
            return_type: Box::new(return_type),
        }
    }

    /// A function can stand in for `target` when it returns something the
    /// target's callers accept, and accepts everything the target's callers
    /// may pass.
    #[must_use]
    pub fn can_assign_to(&self, target: &FunctionType) -> bool {
        self.return_type.can_assign_to(&target.return_type)
            && self.parameters.len() == target.parameters.len()
            && self
                .parameters
                .iter()
                .zip(&target.parameters)
                .all(|(own, theirs)| theirs.can_assign_to(own))
    }
}

impl Type {
    /// Creates a list type `[base]`.
    #[must_use]
    pub fn list(base: Type) -> Self {
        Type::List(Box::new(base))
    }

    /// Creates a function type `(parameters)->return_type`.
    #[must_use]
    pub fn function(parameters: Vec<Type>, return_type: Type) -> Self {
        Type::Function(FunctionType::new(parameters, return_type))
    }

    /// Type equivalence.
    ///
    /// Primitives are equivalent only to themselves, lists when their base
    /// types are equivalent, and function types when each is assignable to
    /// the other.
    #[must_use]
    pub fn is_same_type(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::List(a), Type::List(b)) => a.is_same_type(b),
            (Type::Function(a), Type::Function(b)) => a.can_assign_to(b) && b.can_assign_to(a),
            (Type::List(_) | Type::Function(_), _) | (_, Type::List(_) | Type::Function(_)) => {
                false
            }
            _ => self == other,
        }
    }

    /// Whether a value of this type may be stored in a location of type
    /// `target`.
    #[must_use]
    pub fn can_assign_to(&self, target: &Type) -> bool {
        match (self, target) {
            (_, Type::Any) => true,
            (Type::Function(source), Type::Function(target)) => source.can_assign_to(target),
            _ => self.is_same_type(target),
        }
    }

    /// Returns true for `int` and `float`.
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }

    /// Returns true for `int`, `float` and `str`.
    pub const fn is_numeric_or_string(&self) -> bool {
        matches!(self, Type::Int | Type::Float | Type::String)
    }

    pub const fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Type::List(_))
    }

    pub const fn is_function(&self) -> bool {
        matches!(self, Type::Function(_))
    }

    /// Returns the element type of a list type.
    pub fn list_base(&self) -> Option<&Type> {
        match self {
            Type::List(base) => Some(base),
            _ => None,
        }
    }

    /// Returns the signature of a function type.
    pub fn as_function(&self) -> Option<&FunctionType> {
        match self {
            Type::Function(function) => Some(function),
            _ => None,
        }
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self
            .parameters
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "({params})->{}", self.return_type)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bool => write!(f, "bool"),
            Type::Int => write!(f, "int"),
            Type::Float => write!(f, "float"),
            Type::String => write!(f, "str"),
            Type::Void => write!(f, "void"),
            Type::Type => write!(f, "type"),
            Type::Any => write!(f, "any"),
            Type::List(base) => write!(f, "[{base}]"),
            Type::Function(function) => write!(f, "{function}"),
        }
    }
}
