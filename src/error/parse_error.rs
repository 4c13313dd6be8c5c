#[derive(Debug)]
/// Represents all errors that can occur while parsing a command line.
///
/// The `Display` text of each variant is the exact response written to the
/// output sink when the command is rejected.
pub enum ParseError {
    /// `var` was given without a variable name.
    MissingVariableName,
    /// `var` was given more than one argument.
    TooManyIdentifiers,
    /// The argument of `var` is not a valid identifier name.
    InvalidIdentifier,
    /// An assignment or function expression is malformed.
    InvalidExpression,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingVariableName => write!(f, "No variable to declare"),
            Self::TooManyIdentifiers => write!(f, "Too many identifiers"),
            Self::InvalidIdentifier => write!(f, "Not valid identifier name"),
            Self::InvalidExpression => write!(f, "Not valid expression"),
        }
    }
}

impl std::error::Error for ParseError {}
