#[derive(Debug)]
/// Represents all errors that can occur while operating on the identifier
/// table or resolving a function value.
///
/// The undefined value is not an error: it is the `f64::NAN` sentinel, stored
/// and propagated like any other number.
pub enum RuntimeError {
    /// Tried to declare an identifier whose name is already taken.
    AlreadyExists {
        /// The name of the identifier.
        name: String,
    },
    /// Tried to use an identifier that was never declared.
    NotFound {
        /// The name of the identifier.
        name: String,
    },
    /// An identifier of the wrong kind was used, such as assigning a value to
    /// a function or copying a value out of one.
    WrongKind {
        /// The name of the identifier.
        name: String,
    },
    /// A chain of function references came back to a function that is still
    /// being resolved.
    CyclicReference {
        /// The name of the revisited function.
        name: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyExists { name } => {
                write!(f, "Identifier '{name}' already exists.")
            },
            Self::NotFound { name } => {
                write!(f, "Identifier '{name}' does not exist.")
            },
            Self::WrongKind { name } => {
                write!(f, "Identifier '{name}' cannot be used here.")
            },
            Self::CyclicReference { name } => {
                write!(f, "Cyclic reference detected while resolving '{name}'.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
