use std::collections::BTreeMap;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::value::{FunctionValue, Identifier, Kind},
    util::num::approx_eq,
};

/// Result type used by the identifier table and the resolver.
///
/// All table operations return either a value of type `T` or a `RuntimeError`
/// describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the named identifiers of one calculator session.
///
/// Variables and functions share a single namespace, keyed and ordered by
/// name, so enumeration is always lexicographic regardless of insertion order.
///
/// ## Usage
///
/// A `Calculator` is created once per session and mutated only through its
/// operations. The table never deletes entries; re-assignment operations
/// overwrite in place where their semantics allow it.
pub struct Calculator {
    /// All declared identifiers, keyed and ordered by name.
    identifiers: BTreeMap<String, Identifier>,
}

#[allow(clippy::new_without_default)]
impl Calculator {
    /// Creates a new calculator with an empty identifier table.
    #[must_use]
    pub fn new() -> Self {
        Self { identifiers: BTreeMap::new() }
    }

    /// Declares a variable with the undefined value.
    ///
    /// # Parameters
    /// - `name`: Name of the variable; must be a syntactically valid
    ///   identifier (the command layer's job).
    ///
    /// # Errors
    /// `AlreadyExists` when any identifier, variable or function, is already
    /// declared under `name`. The table is unchanged on failure.
    ///
    /// # Example
    /// ```
    /// use varith::interpreter::evaluator::calculator::Calculator;
    ///
    /// let mut calculator = Calculator::new();
    /// calculator.declare_variable("x").unwrap();
    ///
    /// assert!(calculator.value("x").is_nan());
    /// assert!(calculator.declare_variable("x").is_err());
    /// ```
    pub fn declare_variable(&mut self, name: &str) -> EvalResult<()> {
        if self.identifiers.contains_key(name) {
            return Err(RuntimeError::AlreadyExists { name: name.to_string() });
        }
        self.identifiers.insert(name.to_string(), Identifier::Variable(f64::NAN));
        Ok(())
    }

    /// Assigns a literal value to a variable.
    ///
    /// Assigning a value the variable already holds (within machine epsilon)
    /// is a no-op success. Otherwise any existing variable entry under `name`
    /// is replaced.
    ///
    /// # Parameters
    /// - `name`: Name of the target variable.
    /// - `value`: The literal value.
    ///
    /// # Errors
    /// `WrongKind` when `name` is a declared function; function entries cannot
    /// be overwritten through assignment.
    pub fn assign_literal(&mut self, name: &str, value: f64) -> EvalResult<()> {
        match self.identifiers.get(name) {
            Some(Identifier::Function(_)) => {
                Err(RuntimeError::WrongKind { name: name.to_string() })
            },
            Some(Identifier::Variable(current)) if approx_eq(*current, value) => Ok(()),
            _ => {
                self.identifiers.insert(name.to_string(), Identifier::Variable(value));
                Ok(())
            },
        }
    }

    /// Assigns a snapshot of another identifier's value to a variable.
    ///
    /// Self-assignment (`name == source`) is a no-op success. The copied value
    /// is a snapshot: later changes to `source` do not propagate to `name`.
    ///
    /// # Parameters
    /// - `name`: Name of the target variable.
    /// - `source`: Name of the identifier whose value is copied.
    ///
    /// # Errors
    /// - `NotFound` when `source` is not declared.
    /// - `WrongKind` when `source` is a function; values cannot be copied out
    ///   of functions.
    pub fn assign_from_identifier(&mut self, name: &str, source: &str) -> EvalResult<()> {
        if name == source {
            return Ok(());
        }
        let value = self.variable_value(source)?;
        self.identifiers.insert(name.to_string(), Identifier::Variable(value));
        Ok(())
    }

    /// Declares a function capturing a snapshot of another identifier's value.
    ///
    /// # Parameters
    /// - `name`: Name of the function.
    /// - `source`: Name of the identifier whose value is captured.
    ///
    /// # Errors
    /// - `CyclicReference` when `name == source`.
    /// - `NotFound` when `source` is not declared.
    /// - `WrongKind` when `source` is a function.
    pub fn define_function_from_identifier(&mut self, name: &str, source: &str) -> EvalResult<()> {
        if name == source {
            return Err(RuntimeError::CyclicReference { name: name.to_string() });
        }
        let value = self.variable_value(source)?;
        self.identifiers
            .insert(name.to_string(), Identifier::Function(FunctionValue::Snapshot(value)));
        Ok(())
    }

    /// Declares a function holding an unevaluated binary expression.
    ///
    /// Any prior entry under `name` is removed. The operand names are stored
    /// as raw text; they are neither validated nor resolved until the function
    /// value is requested, so operands may be declared later or never.
    ///
    /// # Parameters
    /// - `name`: Name of the function.
    /// - `lhs`: Left operand name.
    /// - `op`: The operator.
    /// - `rhs`: Right operand name.
    pub fn define_function_from_operation(&mut self,
                                          name: &str,
                                          lhs: &str,
                                          op: BinaryOperator,
                                          rhs: &str) {
        self.identifiers
            .insert(name.to_string(),
                    Identifier::Function(FunctionValue::Operation { lhs: lhs.to_string(),
                                                                    op,
                                                                    rhs: rhs.to_string() }));
    }

    /// Looks up the entry stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Identifier> {
        self.identifiers.get(name)
    }

    /// Looks up the kind of the identifier named `name`.
    #[must_use]
    pub fn kind(&self, name: &str) -> Option<Kind> {
        self.identifiers.get(name).map(Identifier::kind)
    }

    /// Looks up the stored value of the identifier named `name`.
    ///
    /// # Returns
    /// The variable value or function snapshot stored under `name`;
    /// `f64::NAN` when the identifier is absent or holds an unevaluated
    /// expression (which has no stored value until resolved).
    #[must_use]
    pub fn value(&self, name: &str) -> f64 {
        match self.identifiers.get(name) {
            Some(Identifier::Variable(value))
            | Some(Identifier::Function(FunctionValue::Snapshot(value))) => *value,
            _ => f64::NAN,
        }
    }

    /// Iterates over all entries, ordered ascending by name.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Identifier)> {
        self.identifiers
            .iter()
            .map(|(name, identifier)| (name.as_str(), identifier))
    }

    /// Gets the number of declared identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    /// Checks whether the table has no identifiers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Reads the current value of the variable named `source`.
    ///
    /// Shared lookup for the two snapshot-copying operations.
    fn variable_value(&self, source: &str) -> EvalResult<f64> {
        match self.identifiers.get(source) {
            None => Err(RuntimeError::NotFound { name: source.to_string() }),
            Some(Identifier::Function(_)) => {
                Err(RuntimeError::WrongKind { name: source.to_string() })
            },
            Some(Identifier::Variable(value)) => Ok(*value),
        }
    }
}
