//! Integration tests for type equivalence and assignability.

use bjin_core::types::{FunctionType, Type};

fn func(parameters: Vec<Type>, return_type: Type) -> Type {
    Type::function(parameters, return_type)
}

#[test]
fn test_list_types_built_twice_are_equivalent() {
    let a = Type::list(Type::Int);
    let b = Type::list(Type::Int);

    assert!(a.is_same_type(&b));
    assert!(a.can_assign_to(&b));
    assert!(b.can_assign_to(&a));
}

#[test]
fn test_nested_list_equivalence_is_structural() {
    let deep = |base| Type::list(Type::list(Type::list(base)));

    assert!(deep(Type::Int).is_same_type(&deep(Type::Int)));
    assert!(!deep(Type::Int).is_same_type(&deep(Type::Float)));
    assert!(!Type::list(Type::Int).is_same_type(&Type::list(Type::list(Type::Int))));
}

#[test]
fn test_list_of_any_does_not_widen() {
    // Only the outermost target position acts as a sink.
    assert!(!Type::list(Type::Int).can_assign_to(&Type::list(Type::Any)));
    assert!(Type::list(Type::Int).can_assign_to(&Type::Any));
}

#[test]
fn test_function_return_is_covariant() {
    let returns_int = func(vec![Type::Bool], Type::Int);
    let returns_any = func(vec![Type::Bool], Type::Any);

    assert!(returns_int.can_assign_to(&returns_any));
    assert!(!returns_any.can_assign_to(&returns_int));
}

#[test]
fn test_function_return_mismatch_is_rejected() {
    let bool_to_int = func(vec![Type::Bool], Type::Int);
    let bool_to_void = func(vec![Type::Bool], Type::Void);

    assert!(!bool_to_int.can_assign_to(&bool_to_void));
    assert!(!bool_to_void.can_assign_to(&bool_to_int));
}

#[test]
fn test_function_parameters_are_contravariant() {
    let takes_any = func(vec![Type::Any], Type::Void);
    let takes_int = func(vec![Type::Int], Type::Void);

    // A function accepting anything may replace one that accepts ints.
    assert!(takes_any.can_assign_to(&takes_int));
    assert!(!takes_int.can_assign_to(&takes_any));
}

#[test]
fn test_function_arity_must_match() {
    let unary = func(vec![Type::Int], Type::Int);
    let binary = func(vec![Type::Int, Type::Int], Type::Int);

    assert!(!unary.can_assign_to(&binary));
    assert!(!binary.can_assign_to(&unary));
}

#[test]
fn test_function_equivalence_is_mutual_assignability() {
    let a = func(vec![Type::list(Type::Int)], Type::Bool);
    let b = func(vec![Type::list(Type::Int)], Type::Bool);
    let widened = func(vec![Type::list(Type::Int)], Type::Any);

    assert!(a.is_same_type(&b));
    assert!(!a.is_same_type(&widened));
}

#[test]
fn test_higher_order_signatures() {
    // (int, (bool)->void)->int
    let callback = FunctionType::new(vec![Type::Bool], Type::Void);
    let outer = FunctionType::new(vec![Type::Int, Type::Function(callback)], Type::Int);

    let same = FunctionType::new(
        vec![Type::Int, func(vec![Type::Bool], Type::Void)],
        Type::Int,
    );
    assert!(outer.can_assign_to(&same));

    let wrong_callback = FunctionType::new(
        vec![Type::Int, func(vec![Type::Bool], Type::Int)],
        Type::Int,
    );
    assert!(!outer.can_assign_to(&wrong_callback));
}

#[test]
fn test_type_names() {
    insta::assert_snapshot!(Type::list(func(vec![Type::String], Type::Float)), @"[(str)->float]");
    insta::assert_snapshot!(func(vec![], Type::list(Type::Bool)), @"()->[bool]");
    insta::assert_snapshot!(Type::Type, @"type");
}
