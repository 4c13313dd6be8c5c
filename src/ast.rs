/// Represents a binary arithmetic operator.
///
/// These are the only operators accepted in a function declaration of the form
/// `fn <name>=<operand><op><operand>`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// Represents a single parsed command line.
///
/// `Command` covers all accepted command forms. Each variant carries the
/// already-validated arguments of the line it was parsed from; executing a
/// command against the identifier table is the session's job.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `var <name>` — declare a variable with the undefined value.
    DeclareVariable {
        /// The name of the variable.
        name: String,
    },
    /// `let <name>=<literal>` — assign a number literal to a variable.
    AssignLiteral {
        /// The name of the variable.
        name:  String,
        /// The literal value being assigned.
        value: f64,
    },
    /// `let <name>=<source>` — copy another identifier's value into a variable.
    AssignIdentifier {
        /// The name of the variable.
        name:   String,
        /// The name of the identifier whose value is copied.
        source: String,
    },
    /// `fn <name>=<source>` — declare a function from one identifier's value.
    FunctionFromIdentifier {
        /// The name of the function.
        name:   String,
        /// The name of the identifier whose value is captured.
        source: String,
    },
    /// `fn <name>=<lhs><op><rhs>` — declare a function from a binary
    /// expression over two identifiers.
    FunctionFromOperation {
        /// The name of the function.
        name: String,
        /// The left operand name.
        lhs:  String,
        /// The operator.
        op:   BinaryOperator,
        /// The right operand name.
        rhs:  String,
    },
    /// `print <name>` — resolve and print one identifier's value.
    Print {
        /// The name of the identifier to print.
        name: String,
    },
    /// `printvars` — print all variables, ordered by name.
    PrintVariables,
    /// `printfns` — print all functions with their resolved values, ordered by
    /// name.
    PrintFunctions,
}
