use crate::ast::BinaryOperator;

/// Distinguishes the two identifier categories sharing the table namespace.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Kind {
    /// A plain variable holding a directly assigned value.
    Variable,
    /// A derived function resolved on demand.
    Function,
}

/// The stored payload of a declared function.
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionValue {
    /// A copy of another identifier's value, taken when the function was
    /// declared. Later changes to the source do not propagate.
    Snapshot(f64),
    /// An unevaluated two-operand expression, resolved on demand. Operand
    /// names are stored as raw text and are not validated at declaration time.
    Operation {
        /// The left operand name.
        lhs: String,
        /// The operator.
        op:  BinaryOperator,
        /// The right operand name.
        rhs: String,
    },
}

/// Represents one entry of the identifier table.
///
/// Variables and functions live in a single namespace; the entry's name is the
/// table key and is not repeated here.
#[derive(Debug, Clone, PartialEq)]
pub enum Identifier {
    /// A variable value; `f64::NAN` when the variable is undefined.
    Variable(f64),
    /// A function payload: a snapshot or an unevaluated expression.
    Function(FunctionValue),
}

impl Identifier {
    /// Gets the kind of `self`.
    ///
    /// ## Example
    /// ```
    /// use varith::interpreter::value::{Identifier, Kind};
    ///
    /// let identifier = Identifier::Variable(1.5);
    ///
    /// assert_eq!(identifier.kind(), Kind::Variable);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Variable(_) => Kind::Variable,
            Self::Function(_) => Kind::Function,
        }
    }
}
