use logos::Logos;

/// Represents a lexical token in a command line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the command grammar.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// `var`
    #[token("var")]
    Var,
    /// `let`
    #[token("let")]
    Let,
    /// `fn`
    #[token("fn")]
    Fn,
    /// `print`
    #[token("print")]
    Print,
    /// `printvars`
    #[token("printvars")]
    PrintVars,
    /// `printfns`
    #[token("printfns")]
    PrintFns,
    /// Number literal tokens, such as `2`, `0.99` or `1.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// Identifier tokens; variable or function names such as `x` or `Sum`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// Tabs and spaces.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,
}

/// Parses a number literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
