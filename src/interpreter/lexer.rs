use std::fmt;

use logos::Logos;

use crate::{
    error::Error,
    interpreter::position::{Position, Span},
};

/// Reserved words of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    If,
    Elif,
    Else,
    For,
    To,
    By,
    Each,
    In,
    While,
    Break,
    Continue,
    Func,
    Return,
    Null,
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Self::If => "if",
            Self::Elif => "elif",
            Self::Else => "else",
            Self::For => "for",
            Self::To => "to",
            Self::By => "by",
            Self::Each => "each",
            Self::In => "in",
            Self::While => "while",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Func => "func",
            Self::Return => "return",
            Self::Null => "null",
        };
        f.write_str(word)
    }
}

/// Symbolic and word operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    EqualEqual,
    BangEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    Question,
    Assign,
    Arrow,
    And,
    Or,
    Not,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Caret => "^",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Question => "?",
            Self::Assign => "=",
            Self::Arrow => "->",
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
        };
        f.write_str(symbol)
    }
}

/// Brackets and separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Semicolon,
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Semicolon => ";",
        };
        f.write_str(symbol)
    }
}

/// The category and payload of a lexical token.
///
/// Whitespace other than line breaks and `//` line comments are skipped.
/// Keywords and the word operators `and`, `or` and `not` win over identifiers
/// of the same length.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    /// Numeric literals such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),
    /// String literals in single or double quotes, with escapes already
    /// resolved.
    #[regex(r#""([^"\\]|\\.)*""#, parse_string, allow_greedy = true)]
    #[regex(r"'([^'\\]|\\.)*'", parse_string, allow_greedy = true)]
    String(String),
    /// Variable and function names such as `x` or `fib_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_owned())]
    Identifier(String),
    #[token("if", |_| Keyword::If)]
    #[token("elif", |_| Keyword::Elif)]
    #[token("else", |_| Keyword::Else)]
    #[token("for", |_| Keyword::For)]
    #[token("to", |_| Keyword::To)]
    #[token("by", |_| Keyword::By)]
    #[token("each", |_| Keyword::Each)]
    #[token("in", |_| Keyword::In)]
    #[token("while", |_| Keyword::While)]
    #[token("break", |_| Keyword::Break)]
    #[token("continue", |_| Keyword::Continue)]
    #[token("func", |_| Keyword::Func)]
    #[token("return", |_| Keyword::Return)]
    #[token("null", |_| Keyword::Null)]
    Keyword(Keyword),
    #[token("+", |_| Operator::Plus)]
    #[token("-", |_| Operator::Minus)]
    #[token("*", |_| Operator::Star)]
    #[token("/", |_| Operator::Slash)]
    #[token("%", |_| Operator::Percent)]
    #[token("^", |_| Operator::Caret)]
    #[token("==", |_| Operator::EqualEqual)]
    #[token("!=", |_| Operator::BangEqual)]
    #[token(">", |_| Operator::Greater)]
    #[token(">=", |_| Operator::GreaterEqual)]
    #[token("<", |_| Operator::Less)]
    #[token("<=", |_| Operator::LessEqual)]
    #[token("?", |_| Operator::Question)]
    #[token("=", |_| Operator::Assign)]
    #[token("->", |_| Operator::Arrow)]
    #[token("and", |_| Operator::And)]
    #[token("or", |_| Operator::Or)]
    #[token("not", |_| Operator::Not)]
    Operator(Operator),
    #[token("(", |_| Delimiter::LParen)]
    #[token(")", |_| Delimiter::RParen)]
    #[token("[", |_| Delimiter::LBracket)]
    #[token("]", |_| Delimiter::RBracket)]
    #[token("{", |_| Delimiter::LBrace)]
    #[token("}", |_| Delimiter::RBrace)]
    #[token(",", |_| Delimiter::Comma)]
    #[token(":", |_| Delimiter::Colon)]
    #[token(";", |_| Delimiter::Semicolon)]
    Paren(Delimiter),
    /// A line break that ends a statement.
    #[token("\n")]
    Newline,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// End of input. Never produced by logos itself; [`tokenize`] appends it.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "'{n}'"),
            Self::String(s) => write!(f, "'\"{s}\"'"),
            Self::Identifier(name) => write!(f, "'{name}'"),
            Self::Keyword(keyword) => write!(f, "'{keyword}'"),
            Self::Operator(op) => write!(f, "'{op}'"),
            Self::Paren(delimiter) => write!(f, "'{delimiter}'"),
            Self::Newline => write!(f, "end of line"),
            Self::Comment => write!(f, "comment"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

impl TokenKind {
    /// Whether an expression can end with this token.
    fn can_end_statement(&self) -> bool {
        matches!(self,
                 Self::Number(_)
                 | Self::String(_)
                 | Self::Identifier(_)
                 | Self::Keyword(Keyword::Null | Keyword::Break | Keyword::Continue | Keyword::Return)
                 | Self::Paren(Delimiter::RParen | Delimiter::RBracket | Delimiter::RBrace))
    }

    /// Whether a statement can begin with this token.
    fn can_start_statement(&self) -> bool {
        matches!(self,
                 Self::Number(_)
                 | Self::String(_)
                 | Self::Identifier(_)
                 | Self::Keyword(Keyword::Null
                                 | Keyword::If
                                 | Keyword::For
                                 | Keyword::Each
                                 | Keyword::While
                                 | Keyword::Func
                                 | Keyword::Return
                                 | Keyword::Break
                                 | Keyword::Continue)
                 | Self::Operator(Operator::Plus | Operator::Minus | Operator::Not)
                 | Self::Paren(Delimiter::LParen | Delimiter::LBracket))
    }
}

/// A token together with the source range it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Creates a token. A missing end defaults to `start` advanced by one
    /// step.
    #[must_use]
    pub fn new(kind: TokenKind, start: Position, end: Option<Position>) -> Self {
        Self { kind,
               span: Span::new(start, end) }
    }

    #[must_use]
    pub fn is(&self, kind: &TokenKind) -> bool {
        self.kind == *kind
    }
}

/// Resolves the escapes of a quoted string literal.
///
/// Recognised escapes are `\n`, `\t`, `\\`, `\"` and `\'`; any other escaped
/// character stands for itself.
fn parse_string(lex: &logos::Lexer<TokenKind>) -> String {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];
    let mut text = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            text.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => text.push('\n'),
            Some('t') => text.push('\t'),
            Some(other) => text.push(other),
            None => {},
        }
    }
    text
}

/// Drops the line breaks that do not separate two statements.
///
/// A line break is kept only at the top of a `{ }` block (or outside any
/// bracket), after a token that can end an expression and before one that
/// can start a statement. Lines therefore continue after an operator or a
/// comma, inside `( )` and `[ ]`, and before `elif`, `else`, `{` or `->`.
fn drop_continuations(raw: Vec<Token>) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::with_capacity(raw.len());
    let mut open = Vec::new();
    let mut raw = raw.into_iter().peekable();

    while let Some(token) = raw.next() {
        match &token.kind {
            TokenKind::Paren(delimiter @ (Delimiter::LParen | Delimiter::LBracket | Delimiter::LBrace)) => {
                open.push(*delimiter);
            },
            TokenKind::Paren(Delimiter::RParen | Delimiter::RBracket | Delimiter::RBrace) => {
                open.pop();
            },
            TokenKind::Newline => {
                let nested = matches!(open.last(), Some(Delimiter::LParen | Delimiter::LBracket));
                let ends = tokens.last().is_some_and(|prev| prev.kind.can_end_statement());
                let starts = raw.peek().is_some_and(|next| next.kind.can_start_statement());
                if nested || !ends || !starts {
                    continue;
                }
            },
            _ => {},
        }
        tokens.push(token);
    }
    tokens
}

/// Converts source text into a token stream terminated by
/// [`TokenKind::Eof`].
///
/// Every token carries the span it covers in `file_name`. Line breaks are
/// kept as [`TokenKind::Newline`] only where they end a statement.
///
/// # Errors
/// Returns an `Illigal Char` error at the first character no token can start
/// with, such as `$` or an unterminated quote.
///
/// # Example
/// ```
/// use luminary::interpreter::lexer::{Operator, TokenKind, tokenize};
///
/// let tokens = tokenize("1 + 2", "<stdin>").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::Number(1.0),
///                 TokenKind::Operator(Operator::Plus),
///                 TokenKind::Number(2.0),
///                 TokenKind::Eof]);
/// ```
pub fn tokenize(source: &str, file_name: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = TokenKind::lexer(source);
    let mut cursor = Position::new(file_name);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        cursor.advance_through(&source[cursor.index..range.start]);
        let start = cursor.clone();
        let Ok(kind) = result else {
            let ch = source[range.start..].chars().next().unwrap_or_default();
            return Err(Error::illegal_char(format!("'{ch}'"), start, None));
        };
        cursor.advance_through(lexer.slice());
        tokens.push(Token::new(kind, start, Some(cursor.clone())));
    }

    cursor.advance_through(&source[cursor.index..]);
    tokens.push(Token::new(TokenKind::Eof, cursor, None));
    let tokens = drop_continuations(tokens);
    tracing::trace!(count = tokens.len(), file = file_name, "tokenized source");

    Ok(tokens)
}
