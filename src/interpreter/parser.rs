use logos::Logos;

use crate::{
    ast::{BinaryOperator, Command},
    error::ParseError,
    interpreter::lexer::Token,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// One whitespace-separated word of a command line, as the tokens lexed from
/// it. `None` marks a word containing unrecognized characters.
type Word = Option<Vec<Token>>;

/// Parses a full command line.
///
/// This is the entry point for command parsing. The line is tokenized and the
/// tokens are grouped back into whitespace-separated words, so that grammar
/// rules which count words (`var x y` has two arguments, `a = 1` is three
/// words and not an assignment) see the same boundaries the raw line had.
///
/// Grammar: `line := var | let | fn | print | printvars | printfns`
///
/// # Parameters
/// - `line`: One raw input line, without the trailing newline.
///
/// # Returns
/// - `Ok(Some(Command))`: The line is a well-formed command.
/// - `Ok(None)`: The line is empty or does not start with a known command
///   word; such lines produce no response.
///
/// # Errors
/// A `ParseError` whose `Display` text is the response to write when the line
/// names a known command but its arguments are malformed.
pub fn parse_line(line: &str) -> ParseResult<Option<Command>> {
    let words = split_words(line);
    let Some((first, args)) = words.split_first() else {
        return Ok(None);
    };

    match first.as_deref() {
        Some([Token::Var]) => parse_var(args).map(Some),
        Some([Token::Let]) => parse_let(args).map(Some),
        Some([Token::Fn]) => parse_fn(args).map(Some),
        Some([Token::Print]) => Ok(Some(parse_print(args))),
        Some([Token::PrintVars]) => Ok(Some(Command::PrintVariables)),
        Some([Token::PrintFns]) => Ok(Some(Command::PrintFunctions)),
        _ => Ok(None),
    }
}

/// Groups the tokens of `line` into whitespace-separated words.
///
/// The lexer skips blanks, so word boundaries are recovered from token spans:
/// a token starting exactly where the previous one ended belongs to the same
/// word. A word with any unrecognized characters becomes `None`.
fn split_words(line: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current: Word = Some(Vec::new());
    let mut started = false;
    let mut previous_end = 0;

    for (token, span) in Token::lexer(line).spanned() {
        if started && span.start != previous_end {
            words.push(std::mem::replace(&mut current, Some(Vec::new())));
        }
        started = true;
        previous_end = span.end;

        match token {
            Ok(token) => {
                if let Some(tokens) = &mut current {
                    tokens.push(token);
                }
            },
            Err(()) => current = None,
        }
    }
    if started {
        words.push(current);
    }

    words
}

/// Parses the arguments of a `var` command.
///
/// Grammar: `var <identifier>`
///
/// # Errors
/// - `MissingVariableName` when no argument is given.
/// - `TooManyIdentifiers` when more than one word follows the command.
/// - `InvalidIdentifier` when the single argument is not an identifier.
fn parse_var(args: &[Word]) -> ParseResult<Command> {
    match args {
        [] => Err(ParseError::MissingVariableName),
        [word] => match word.as_deref() {
            Some([Token::Identifier(name)]) => Ok(Command::DeclareVariable { name: name.clone() }),
            _ => Err(ParseError::InvalidIdentifier),
        },
        _ => Err(ParseError::TooManyIdentifiers),
    }
}

/// Parses the arguments of a `let` command.
///
/// Grammar: `let <identifier>=<number> | let <identifier>=-<number> |
/// let <identifier>=<identifier>`
///
/// The whole assignment must be one word; blanks around `=` are rejected.
///
/// # Errors
/// `InvalidExpression` for every malformed form.
fn parse_let(args: &[Word]) -> ParseResult<Command> {
    let [word] = args else {
        return Err(ParseError::InvalidExpression);
    };

    match word.as_deref() {
        Some([Token::Identifier(name), Token::Equals, Token::Number(value)]) => {
            Ok(Command::AssignLiteral { name:  name.clone(),
                                        value: *value, })
        },
        Some([Token::Identifier(name), Token::Equals, Token::Minus, Token::Number(value)]) => {
            Ok(Command::AssignLiteral { name:  name.clone(),
                                        value: -value, })
        },
        Some([Token::Identifier(name), Token::Equals, Token::Identifier(source)]) => {
            Ok(Command::AssignIdentifier { name:   name.clone(),
                                           source: source.clone(), })
        },
        _ => Err(ParseError::InvalidExpression),
    }
}

/// Parses the arguments of a `fn` command.
///
/// Grammar: `fn <identifier>=<identifier> |
/// fn <identifier>=<identifier><op><identifier>` with `op` one of `+ - * /`.
///
/// # Errors
/// `InvalidExpression` for every malformed form.
fn parse_fn(args: &[Word]) -> ParseResult<Command> {
    let [word] = args else {
        return Err(ParseError::InvalidExpression);
    };

    match word.as_deref() {
        Some([Token::Identifier(name), Token::Equals, Token::Identifier(source)]) => {
            Ok(Command::FunctionFromIdentifier { name:   name.clone(),
                                                 source: source.clone(), })
        },
        Some(
            [Token::Identifier(name), Token::Equals, Token::Identifier(lhs), operator, Token::Identifier(rhs)],
        ) => {
            let op = match operator {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Sub,
                Token::Star => BinaryOperator::Mul,
                Token::Slash => BinaryOperator::Div,
                _ => return Err(ParseError::InvalidExpression),
            };
            Ok(Command::FunctionFromOperation { name: name.clone(),
                                                lhs: lhs.clone(),
                                                op,
                                                rhs: rhs.clone() })
        },
        _ => Err(ParseError::InvalidExpression),
    }
}

/// Parses the arguments of a `print` command.
///
/// Only the first argument word is considered; a missing or ill-formed name is
/// kept as an empty string and resolves as an unknown identifier.
fn parse_print(args: &[Word]) -> Command {
    let name = match args.first().and_then(|word| word.as_deref()) {
        Some([Token::Identifier(name)]) => name.clone(),
        _ => String::new(),
    };

    Command::Print { name }
}
