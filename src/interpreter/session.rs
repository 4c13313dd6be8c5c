use std::io::{self, Write};

use crate::{
    ast::{BinaryOperator, Command},
    error::RuntimeError,
    interpreter::{
        evaluator::{calculator::Calculator, resolver},
        parser::parse_line,
        value::{Identifier, Kind},
    },
};

/// Runs commands against one calculator, writing responses to an output sink.
///
/// The session is the command layer: it parses lines, dispatches the resulting
/// commands to the identifier table and the resolver, and formats all output.
/// Every failure is recovered locally by writing a fixed message; the table is
/// left unchanged by rejected commands.
///
/// ## Usage
///
/// A `Session` is created once per input source and fed one line at a time.
pub struct Session<W> {
    calculator: Calculator,
    output:     W,
}

impl<W: Write> Session<W> {
    /// Creates a session with an empty calculator writing to `output`.
    #[must_use]
    pub fn new(output: W) -> Self {
        Self { calculator: Calculator::new(),
               output }
    }

    /// Gets the calculator owned by this session.
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Consumes the session and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Handles a single command line.
    ///
    /// # Parameters
    /// - `line`: One raw input line, without the trailing newline.
    ///
    /// # Returns
    /// - `Ok(true)`: The command was executed.
    /// - `Ok(false)`: The command was rejected (a message was written), or the
    ///   line was empty or started with an unknown command word (no output).
    ///
    /// # Errors
    /// Returns an error only when writing to the output sink fails.
    pub fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(false),
            Err(error) => {
                writeln!(self.output, "{error}")?;
                return Ok(false);
            },
        };

        match command {
            Command::DeclareVariable { name } => self.declare_variable(&name),
            Command::AssignLiteral { name, value } => self.assign_literal(&name, value),
            Command::AssignIdentifier { name, source } => self.assign_identifier(&name, &source),
            Command::FunctionFromIdentifier { name, source } => {
                self.function_from_identifier(&name, &source)
            },
            Command::FunctionFromOperation { name, lhs, op, rhs } => {
                self.function_from_operation(&name, &lhs, op, &rhs)
            },
            Command::Print { name } => self.print_value(&name),
            Command::PrintVariables => self.print_variables(),
            Command::PrintFunctions => self.print_functions(),
        }
    }

    fn declare_variable(&mut self, name: &str) -> io::Result<bool> {
        if self.calculator.declare_variable(name).is_err() {
            writeln!(self.output, "Variable already exist")?;
            return Ok(false);
        }
        Ok(true)
    }

    fn assign_literal(&mut self, name: &str, value: f64) -> io::Result<bool> {
        if self.calculator.assign_literal(name, value).is_err() {
            writeln!(self.output, "Cannot assign value to function")?;
            return Ok(false);
        }
        Ok(true)
    }

    fn assign_identifier(&mut self, name: &str, source: &str) -> io::Result<bool> {
        if self.calculator.kind(name) == Some(Kind::Function) {
            writeln!(self.output, "Cannot assign value to function")?;
            return Ok(false);
        }
        if self.calculator.assign_from_identifier(name, source).is_err() {
            writeln!(self.output, "Assignment not possible")?;
            return Ok(false);
        }
        Ok(true)
    }

    fn function_from_identifier(&mut self, name: &str, source: &str) -> io::Result<bool> {
        if self.calculator.kind(name).is_some() {
            writeln!(self.output, "Identifier already exist")?;
            return Ok(false);
        }
        match self.calculator.define_function_from_identifier(name, source) {
            Ok(()) => Ok(true),
            Err(RuntimeError::NotFound { .. }) => {
                writeln!(self.output, "Identifier not exist")?;
                Ok(false)
            },
            Err(_) => {
                writeln!(self.output, "Not possible to add function")?;
                Ok(false)
            },
        }
    }

    fn function_from_operation(&mut self,
                               name: &str,
                               lhs: &str,
                               op: BinaryOperator,
                               rhs: &str)
                               -> io::Result<bool> {
        if self.calculator.kind(name).is_some() {
            writeln!(self.output, "Identifier already exist")?;
            return Ok(false);
        }
        self.calculator.define_function_from_operation(name, lhs, op, rhs);
        Ok(true)
    }

    fn print_value(&mut self, name: &str) -> io::Result<bool> {
        match self.calculator.kind(name) {
            None => {
                writeln!(self.output, "Variable not exist")?;
                Ok(false)
            },
            Some(Kind::Variable) => {
                writeln!(self.output, "{}", display_raw(self.calculator.value(name)))?;
                Ok(true)
            },
            Some(Kind::Function) => match resolver::resolve(&self.calculator, name) {
                Ok(value) => {
                    writeln!(self.output, "{}", display_fixed(value))?;
                    Ok(true)
                },
                Err(error) => {
                    writeln!(self.output, "{error}")?;
                    Ok(false)
                },
            },
        }
    }

    fn print_variables(&mut self) -> io::Result<bool> {
        for (name, identifier) in self.calculator.entries() {
            if let Identifier::Variable(value) = identifier {
                writeln!(self.output, "{name}:{}", display_fixed(*value))?;
            }
        }
        Ok(true)
    }

    fn print_functions(&mut self) -> io::Result<bool> {
        let mut resolved_all = true;

        for (name, identifier) in self.calculator.entries() {
            if identifier.kind() != Kind::Function {
                continue;
            }
            match resolver::resolve(&self.calculator, name) {
                Ok(value) => writeln!(self.output, "{name}:{}", display_fixed(value))?,
                Err(error) => {
                    writeln!(self.output, "{error}")?;
                    resolved_all = false;
                },
            }
        }

        Ok(resolved_all)
    }
}

/// Formats a variable value the way `print` renders it: the plain `f64`
/// rendering, with the undefined sentinel written as `nan`.
fn display_raw(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        value.to_string()
    }
}

/// Formats a resolved value with exactly two decimal places, with the
/// undefined sentinel written as `nan`.
fn display_fixed(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{value:.2}")
    }
}
