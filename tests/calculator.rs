use varith::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{calculator::Calculator, resolver},
        value::Kind,
    },
    util::num::approx_eq,
};

#[test]
fn declaration_succeeds_exactly_once() {
    let mut calculator = Calculator::new();

    calculator.declare_variable("x").unwrap();
    assert_eq!(calculator.len(), 1);
    assert!(calculator.value("x").is_nan());

    let error = calculator.declare_variable("x").unwrap_err();
    assert!(matches!(error, RuntimeError::AlreadyExists { .. }));
    assert_eq!(calculator.len(), 1);
}

#[test]
fn assigned_literal_is_read_back() {
    let mut calculator = Calculator::new();

    calculator.assign_literal("a", 1.25).unwrap();
    assert!(approx_eq(calculator.value("a"), 1.25));

    calculator.assign_literal("a", -3.0).unwrap();
    assert!(approx_eq(calculator.value("a"), -3.0));
}

#[test]
fn copied_value_is_a_snapshot() {
    let mut calculator = Calculator::new();

    calculator.assign_literal("a", 1.0).unwrap();
    calculator.assign_from_identifier("b", "a").unwrap();
    calculator.assign_literal("a", 2.0).unwrap();

    assert!(approx_eq(calculator.value("b"), 1.0));
}

#[test]
fn self_assignment_declares_nothing() {
    let mut calculator = Calculator::new();

    calculator.assign_from_identifier("a", "a").unwrap();
    assert!(calculator.is_empty());
}

#[test]
fn copy_sources_are_checked() {
    let mut calculator = Calculator::new();

    let error = calculator.assign_from_identifier("b", "missing").unwrap_err();
    assert!(matches!(error, RuntimeError::NotFound { .. }));

    calculator.assign_literal("a", 1.0).unwrap();
    calculator.define_function_from_identifier("f", "a").unwrap();
    let error = calculator.assign_from_identifier("b", "f").unwrap_err();
    assert!(matches!(error, RuntimeError::WrongKind { .. }));
}

#[test]
fn function_snapshot_does_not_follow_its_source() {
    let mut calculator = Calculator::new();

    calculator.assign_literal("a", 1.5).unwrap();
    calculator.define_function_from_identifier("f", "a").unwrap();
    calculator.assign_literal("a", 2.0).unwrap();

    assert!(approx_eq(resolver::resolve(&calculator, "f").unwrap(), 1.5));
}

#[test]
fn function_sources_are_checked() {
    let mut calculator = Calculator::new();

    let error = calculator.define_function_from_identifier("f", "f").unwrap_err();
    assert!(matches!(error, RuntimeError::CyclicReference { .. }));

    let error = calculator.define_function_from_identifier("f", "missing").unwrap_err();
    assert!(matches!(error, RuntimeError::NotFound { .. }));

    calculator.assign_literal("a", 1.0).unwrap();
    calculator.define_function_from_identifier("g", "a").unwrap();
    let error = calculator.define_function_from_identifier("h", "g").unwrap_err();
    assert!(matches!(error, RuntimeError::WrongKind { .. }));
}

#[test]
fn assigning_to_a_function_is_rejected() {
    let mut calculator = Calculator::new();

    calculator.assign_literal("a", 1.0).unwrap();
    calculator.define_function_from_identifier("f", "a").unwrap();

    let error = calculator.assign_literal("f", 2.0).unwrap_err();
    assert!(matches!(error, RuntimeError::WrongKind { .. }));
    assert_eq!(calculator.kind("f"), Some(Kind::Function));
}

#[test]
fn operation_overwrites_any_prior_entry() {
    let mut calculator = Calculator::new();

    calculator.assign_literal("f", 1.0).unwrap();
    calculator.define_function_from_operation("f", "a", BinaryOperator::Add, "b");

    assert_eq!(calculator.kind("f"), Some(Kind::Function));
    assert!(calculator.value("f").is_nan());
}

#[test]
fn division_by_zero_resolves_to_infinity() {
    let mut calculator = Calculator::new();

    calculator.assign_literal("a", 1.0).unwrap();
    calculator.assign_literal("b", 0.0).unwrap();
    calculator.define_function_from_operation("q", "a", BinaryOperator::Div, "b");

    let value = resolver::resolve(&calculator, "q").unwrap();
    assert!(value.is_infinite() && value.is_sign_positive());
}

#[test]
fn unknown_and_undefined_operands_resolve_to_nan() {
    let mut calculator = Calculator::new();

    calculator.define_function_from_operation("f", "a", BinaryOperator::Add, "b");
    assert!(resolver::resolve(&calculator, "f").unwrap().is_nan());

    calculator.declare_variable("a").unwrap();
    calculator.assign_literal("b", 2.0).unwrap();
    assert!(resolver::resolve(&calculator, "f").unwrap().is_nan());
}

#[test]
fn resolving_a_non_function_yields_nan() {
    let mut calculator = Calculator::new();

    calculator.assign_literal("a", 1.0).unwrap();
    assert!(resolver::resolve(&calculator, "a").unwrap().is_nan());
    assert!(resolver::resolve(&calculator, "missing").unwrap().is_nan());
}

#[test]
fn functions_resolve_through_other_functions() {
    let mut calculator = Calculator::new();

    calculator.assign_literal("a", 2.0).unwrap();
    calculator.assign_literal("b", 3.0).unwrap();
    calculator.define_function_from_operation("Sum", "a", BinaryOperator::Add, "b");
    calculator.define_function_from_operation("Mult", "a", BinaryOperator::Mul, "b");
    calculator.define_function_from_operation("ResFunc", "Sum", BinaryOperator::Sub, "Mult");

    assert!(approx_eq(resolver::resolve(&calculator, "ResFunc").unwrap(), -1.0));
}

#[test]
fn repeated_operands_are_not_a_cycle() {
    let mut calculator = Calculator::new();

    calculator.assign_literal("a", 1.0).unwrap();
    calculator.define_function_from_operation("s", "a", BinaryOperator::Add, "a");
    calculator.define_function_from_operation("d", "s", BinaryOperator::Mul, "s");

    assert!(approx_eq(resolver::resolve(&calculator, "d").unwrap(), 4.0));
}

#[test]
fn cyclic_references_are_detected() {
    let mut calculator = Calculator::new();

    calculator.define_function_from_operation("f", "g", BinaryOperator::Add, "h");
    calculator.define_function_from_operation("g", "f", BinaryOperator::Add, "h");

    let error = resolver::resolve(&calculator, "f").unwrap_err();
    assert!(matches!(error, RuntimeError::CyclicReference { .. }));
}

#[test]
fn entries_are_ordered_by_name() {
    let mut calculator = Calculator::new();

    calculator.assign_literal("c", 3.0).unwrap();
    calculator.assign_literal("a", 1.0).unwrap();
    calculator.define_function_from_operation("b", "a", BinaryOperator::Add, "c");

    let names: Vec<&str> = calculator.entries().map(|(name, _)| name).collect();
    assert_eq!(names, ["a", "b", "c"]);
}
