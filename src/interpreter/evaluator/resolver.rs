use std::collections::HashSet;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::calculator::{Calculator, EvalResult},
        value::{FunctionValue, Identifier},
    },
    util::num::approx_eq,
};

/// Resolves the value of the function named `name`.
///
/// Resolution walks the stored expression recursively: each operand may be a
/// variable (read directly) or another function (resolved the same way). The
/// undefined sentinel propagates through every operation that consumes it, and
/// names that resolve to anything other than a function yield the sentinel
/// rather than an error.
///
/// # Parameters
/// - `calculator`: The identifier table to resolve against.
/// - `name`: Name of the function to resolve.
///
/// # Returns
/// The numeric value of the function; `f64::NAN` when `name` is absent, is
/// not a function, or references anything undefined.
///
/// # Errors
/// `CyclicReference` when a chain of function references comes back to a
/// function that is still being resolved.
///
/// # Example
/// ```
/// use varith::{
///     ast::BinaryOperator,
///     interpreter::evaluator::{calculator::Calculator, resolver},
/// };
///
/// let mut calculator = Calculator::new();
/// calculator.assign_literal("a", 2.0).unwrap();
/// calculator.assign_literal("b", 3.0).unwrap();
/// calculator.define_function_from_operation("Sum", "a", BinaryOperator::Add, "b");
///
/// assert_eq!(resolver::resolve(&calculator, "Sum").unwrap(), 5.0);
/// ```
pub fn resolve(calculator: &Calculator, name: &str) -> EvalResult<f64> {
    let mut in_progress = HashSet::new();
    resolve_function(calculator, name, &mut in_progress)
}

/// Resolves one function while tracking the names currently being resolved.
///
/// `in_progress` holds the names on the active resolution path. A name is
/// removed again on the way out, so a function referenced twice through
/// different branches is not mistaken for a cycle.
fn resolve_function(calculator: &Calculator,
                    name: &str,
                    in_progress: &mut HashSet<String>)
                    -> EvalResult<f64> {
    if !in_progress.insert(name.to_string()) {
        return Err(RuntimeError::CyclicReference { name: name.to_string() });
    }

    let value = match calculator.get(name) {
        Some(Identifier::Function(FunctionValue::Snapshot(value))) => *value,
        Some(Identifier::Function(FunctionValue::Operation { lhs, op, rhs })) => {
            let left = resolve_operand(calculator, lhs, in_progress)?;
            let right = resolve_operand(calculator, rhs, in_progress)?;

            if left.is_nan() || right.is_nan() {
                f64::NAN
            } else {
                apply_operator(*op, left, right)
            }
        },
        _ => f64::NAN,
    };

    in_progress.remove(name);
    Ok(value)
}

/// Resolves one operand of a stored expression.
///
/// An unknown operand yields the undefined sentinel, a variable yields its
/// stored value and a function is resolved recursively.
fn resolve_operand(calculator: &Calculator,
                   name: &str,
                   in_progress: &mut HashSet<String>)
                   -> EvalResult<f64> {
    match calculator.get(name) {
        None => Ok(f64::NAN),
        Some(Identifier::Variable(value)) => Ok(*value),
        Some(Identifier::Function(_)) => resolve_function(calculator, name, in_progress),
    }
}

/// Applies a binary operator to two resolved operands.
///
/// Division checks the divisor against zero within machine epsilon and yields
/// positive infinity instead of an error when it matches.
fn apply_operator(op: BinaryOperator, left: f64, right: f64) -> f64 {
    use BinaryOperator::{Add, Div, Mul, Sub};

    match op {
        Add => left + right,
        Sub => left - right,
        Mul => left * right,
        Div => {
            if approx_eq(right, 0.0) {
                f64::INFINITY
            } else {
                left / right
            }
        },
    }
}
