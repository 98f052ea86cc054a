//! Operators, conditionals, lists and subscripts.

mod common;

use bjin_ast::build::*;
use bjin_ast::BinaryOperator::*;
use bjin_core::types::Type;
use bjin_semantic::resolved::Statement;
use common::{error_of, print, resolve, should_pass};

/// Type of the variable declared by the last statement.
fn declared_type(statements: Vec<bjin_ast::Statement>) -> Type {
    let resolved = resolve(statements);
    match resolved.statements.last() {
        Some(Statement::VariableDeclaration { variable, .. }) => variable.ty.clone(),
        other => panic!("expected a declaration, got {other:?}"),
    }
}

#[test]
fn test_literal_types() {
    assert_eq!(declared_type(vec![let_var("a", int(1))]), Type::Int);
    assert_eq!(declared_type(vec![let_var("a", float(1.5))]), Type::Float);
    assert_eq!(declared_type(vec![let_var("a", boolean(false))]), Type::Bool);
    assert_eq!(declared_type(vec![let_var("a", string("s"))]), Type::String);
}

#[test]
fn test_conditionals() {
    assert!(should_pass(vec![print(conditional(boolean(true), int(8), int(5)))]));
    assert!(should_pass(vec![print(conditional(
        binary(Less, int(1), int(2)),
        float(8.0),
        negate(float(5.22)),
    ))]));
    assert_eq!(
        declared_type(vec![let_var(
            "s",
            conditional(binary(Less, int(1), int(2)), string("x"), string("y"))
        )]),
        Type::String
    );
}

#[test]
fn test_conditional_errors() {
    insta::assert_snapshot!(
        error_of(vec![print(conditional(int(1), int(2), int(3)))]),
        @"Expected a bool, found int"
    );
    insta::assert_snapshot!(
        error_of(vec![print(conditional(boolean(true), int(1), boolean(true)))]),
        @"Operands do not have the same type"
    );
}

#[test]
fn test_logical_operators() {
    let operands = || {
        vec![
            boolean(true),
            binary(Less, int(1), int(2)),
            boolean(false),
            not(boolean(true)),
        ]
    };
    assert!(should_pass(vec![print(or(operands()))]));
    assert!(should_pass(vec![print(and(operands()))]));

    assert_eq!(
        error_of(vec![print(or(vec![boolean(false), int(1)]))]),
        "Expected a bool, found int"
    );
    assert_eq!(
        error_of(vec![print(and(vec![boolean(false), int(1)]))]),
        "Expected a bool, found int"
    );
}

#[test]
fn test_relations() {
    assert!(should_pass(vec![print(and(vec![
        binary(LessEqual, int(1), int(2)),
        binary(Greater, string("x"), string("y")),
        binary(Less, float(3.5), float(1.2)),
    ]))]));
}

#[test]
fn test_relational_operand_errors() {
    for operator in [Less, LessEqual, Greater, GreaterEqual] {
        assert_eq!(
            error_of(vec![print(binary(operator, boolean(false), int(1)))]),
            "Expected a number or string, found bool",
            "operator {}",
            operator.symbol()
        );
    }
    assert_eq!(
        error_of(vec![print(binary(Less, int(1), float(1.0)))]),
        "Operands do not have the same type"
    );
}

#[test]
fn test_arithmetic_operand_errors() {
    assert_eq!(
        error_of(vec![print(binary(Add, boolean(false), int(1)))]),
        "Expected a number or string, found bool"
    );
    for operator in [Subtract, Multiply, Divide, Modulo, Power] {
        assert_eq!(
            error_of(vec![print(binary(operator, boolean(false), int(1)))]),
            "Expected a number, found bool",
            "operator {}",
            operator.symbol()
        );
    }
}

#[test]
fn test_arithmetic_result_types() {
    assert_eq!(
        declared_type(vec![let_var("a", binary(Power, float(2.0), float(0.5)))]),
        Type::Float
    );
    assert_eq!(
        declared_type(vec![let_var("a", binary(Modulo, int(7), int(2)))]),
        Type::Int
    );
    assert_eq!(
        declared_type(vec![let_var("a", binary(Add, string("a"), string("b")))]),
        Type::String
    );
}

#[test]
fn test_no_implicit_numeric_widening() {
    assert_eq!(
        error_of(vec![print(binary(Add, int(1), float(2.0)))]),
        "Operands do not have the same type"
    );
    assert_eq!(
        error_of(vec![print(binary(Equal, int(2), float(2.0)))]),
        "Operands do not have the same type"
    );
}

#[test]
fn test_equality() {
    assert!(should_pass(vec![print(binary(
        Equal,
        list(vec![int(1)]),
        list(vec![int(5), int(8)])
    ))]));
    assert!(should_pass(vec![print(binary(
        NotEqual,
        list(vec![int(1)]),
        list(vec![int(5), int(8)])
    ))]));
    assert_eq!(
        error_of(vec![print(binary(Equal, boolean(false), int(1)))]),
        "Operands do not have the same type"
    );
    assert_eq!(
        error_of(vec![print(binary(NotEqual, boolean(false), int(1)))]),
        "Operands do not have the same type"
    );
    assert_eq!(
        declared_type(vec![let_var("e", binary(Equal, string("a"), string("b")))]),
        Type::Bool
    );
}

#[test]
fn test_unary_operators() {
    insta::assert_snapshot!(
        error_of(vec![print(negate(boolean(true)))]),
        @"Expected a number, found bool"
    );
    insta::assert_snapshot!(
        error_of(vec![print(not(string("hello")))]),
        @"Expected a bool, found str"
    );
    assert_eq!(
        declared_type(vec![let_var("n", negate(float(1.0)))]),
        Type::Float
    );
}

#[test]
fn test_nested_lists_and_subscripts() {
    assert!(should_pass(vec![
        let_var("x", list(vec![list(vec![list(vec![list(vec![int(1)])])])])),
        print(binary(
            Add,
            subscript(
                subscript(subscript(subscript(ident("x"), int(0)), int(0)), int(0)),
                int(0)
            ),
            int(2),
        )),
    ]));
    assert_eq!(
        declared_type(vec![
            let_var("a", list(vec![int(1), int(2)])),
            let_var("b", subscript(ident("a"), int(0))),
        ]),
        Type::Int
    );
}

#[test]
fn test_subscript_errors() {
    assert_eq!(
        error_of(vec![
            let_var("a", list(vec![int(1)])),
            print(subscript(ident("a"), boolean(false))),
        ]),
        "Expected an integer, found bool"
    );
    assert_eq!(
        error_of(vec![let_var("a", int(1)), print(subscript(ident("a"), int(0)))]),
        "List expected"
    );
}

#[test]
fn test_list_homogeneity() {
    insta::assert_snapshot!(
        error_of(vec![print(list(vec![int(3), float(3.0)]))]),
        @"Not all elements have the same type"
    );
    assert_eq!(
        declared_type(vec![let_var(
            "l",
            list(vec![list(vec![int(1)]), list(vec![int(2), int(3)])])
        )]),
        Type::list(Type::list(Type::Int))
    );
}

#[test]
fn test_list_of_functions_is_homogeneous_by_structure() {
    assert_eq!(
        declared_type(vec![let_var("fs", list(vec![ident("sin"), ident("cos")]))]),
        Type::list(Type::function(vec![Type::Float], Type::Float))
    );
}

#[test]
fn test_empty_list_literals() {
    assert_eq!(
        declared_type(vec![let_var("a", empty_list(named_type("int")))]),
        Type::list(Type::Int)
    );
    assert_eq!(
        declared_type(vec![let_var("a", empty_list(list_type(named_type("str"))))]),
        Type::list(Type::list(Type::String))
    );
    assert_eq!(
        error_of(vec![let_var("a", list(vec![]))]),
        "Cannot infer the type of an empty list"
    );
    assert_eq!(
        error_of(vec![let_var("x", int(1)), let_var("a", empty_list(named_type("x")))]),
        "Type expected"
    );
}

#[test]
fn test_function_typed_empty_list() {
    assert_eq!(
        declared_type(vec![let_var(
            "handlers",
            empty_list(function_type(vec![named_type("int")], named_type("void")))
        )]),
        Type::list(Type::function(vec![Type::Int], Type::Void))
    );
}

#[test]
fn test_resolved_expressions_carry_types() {
    let resolved = resolve(vec![
        let_var("a", list(vec![int(1), int(2)])),
        print(subscript(ident("a"), int(1))),
    ]);
    let Some(Statement::Expression(call)) = resolved.statements.last() else {
        panic!("expected an expression statement");
    };
    assert_eq!(call.ty, Type::Void);

    let bjin_semantic::resolved::ExpressionKind::Call { arguments, .. } = &call.kind else {
        panic!("expected a call");
    };
    assert_eq!(arguments[0].ty, Type::Int);
}
