use std::iter::Peekable;

use crate::{
    ast::Node,
    error::Error,
    interpreter::{
        lexer::{Delimiter, Token, TokenKind},
        parser::{binary::parse_ternary, statement::parse_statement, utils::end_of_input},
        position::Span,
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, Error>;

/// Parses a complete token stream into a program.
///
/// The program is a [`Node::Block`] holding every top-level statement.
/// Statements are separated by line breaks or `;`.
///
/// # Errors
/// Returns an `Invalid Syntax` error at the first token that does not fit
/// the grammar.
///
/// # Example
/// ```
/// use luminary::{
///     ast::Node,
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("x = 1; x + 2", "<stdin>").unwrap();
/// let Node::Block { statements, .. } = parse(&tokens).unwrap() else {
///     panic!("expected a block");
/// };
/// assert_eq!(statements.len(), 2);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Node> {
    let mut iter = tokens.iter().peekable();
    let program = parse_program(&mut iter)?;
    tracing::debug!(tokens = tokens.len(), "parsed program");

    Ok(program)
}

fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let start = tokens.peek().map(|token| token.span.clone()).ok_or_else(end_of_input)?;
    let mut statements = Vec::new();

    loop {
        let Some(token) = tokens.peek().copied() else {
            return Err(end_of_input());
        };
        match &token.kind {
            TokenKind::Eof => {
                let span = Span::new(start.start, Some(token.span.start.clone()));
                return Ok(Node::Block { statements, span });
            },
            TokenKind::Paren(Delimiter::Semicolon) | TokenKind::Newline => {
                tokens.next();
            },
            _ => statements.push(parse_statement(tokens)?),
        }
    }
}

/// Parses one expression, starting from the lowest precedence level.
///
/// Grammar: `expression := ternary`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    ensure_sufficient_stack(|| parse_ternary(tokens))
}
