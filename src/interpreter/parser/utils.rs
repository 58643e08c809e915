use std::iter::Peekable;

use crate::{
    error::Error,
    interpreter::{
        lexer::{Delimiter, Keyword, Operator, Token, TokenKind},
        parser::core::ParseResult,
        position::Span,
    },
};

/// Error for a token stream that ends without an `Eof` token.
pub(in crate::interpreter::parser) fn end_of_input() -> Error {
    Error::invalid_syntax("Unexpected end of input", None)
}

/// Error for `token` appearing where `expected` was required.
pub(in crate::interpreter::parser) fn unexpected(token: &Token, expected: &str) -> Error {
    Error::invalid_syntax(format!("Expected {expected}, found {}", token.kind),
                          Some(token.span.clone()))
}

/// Returns the next token if it has the given kind, consuming it.
pub(in crate::interpreter::parser) fn next_if_kind<'a, I>(tokens: &mut Peekable<I>,
                                                          kind: &TokenKind)
                                                          -> Option<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|token| token.is(kind))
}

/// Consumes a token of the given kind or fails with
/// `Expected <description>`.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: &TokenKind,
                                                    description: &str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.is(kind) => Ok(token),
        Some(token) => Err(unexpected(token, description)),
        None => Err(end_of_input()),
    }
}

/// Consumes a delimiter token, describing it by its symbol on failure.
pub(in crate::interpreter::parser) fn expect_delimiter<'a, I>(tokens: &mut Peekable<I>,
                                                              delimiter: Delimiter)
                                                              -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, &TokenKind::Paren(delimiter), &format!("'{delimiter}'"))
}

/// Parses a comma-separated list of items until a closing delimiter.
///
/// Shared by list literals, call arguments and parameter lists. An
/// immediately encountered closing delimiter produces an empty list.
///
/// Grammar: `list := (item ("," item)*)? closing`
///
/// # Returns
/// The parsed items and the span of the closing delimiter.
///
/// # Errors
/// Fails if an item fails to parse, if anything other than `,` or the
/// closing delimiter follows an item, or if the input ends first.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: Delimiter)
    -> ParseResult<(Vec<T>, Span)>
    where I: Iterator<Item = &'a Token> + Clone
{
    let closing_kind = TokenKind::Paren(closing);
    let mut items = Vec::new();
    if let Some(token) = next_if_kind(tokens, &closing_kind) {
        return Ok((items, token.span.clone()));
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(Token { kind: TokenKind::Paren(Delimiter::Comma),
                         .. }) => {},
            Some(token) if token.is(&closing_kind) => return Ok((items, token.span.clone())),
            Some(token) => return Err(unexpected(token, &format!("',' or '{closing}'"))),
            None => return Err(end_of_input()),
        }
    }
}

/// Parses a plain identifier and returns its name and span.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, Span)>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token { kind: TokenKind::Identifier(name),
                     span, }) => Ok((name.clone(), span.clone())),
        Some(token) => Err(unexpected(token, "an identifier")),
        None => Err(end_of_input()),
    }
}

/// Whether a token of this kind can begin an expression.
pub(in crate::interpreter::parser) const fn can_start_expression(kind: &TokenKind) -> bool {
    matches!(kind,
             TokenKind::Number(_)
             | TokenKind::String(_)
             | TokenKind::Identifier(_)
             | TokenKind::Keyword(Keyword::Null
                                  | Keyword::If
                                  | Keyword::For
                                  | Keyword::Each
                                  | Keyword::While
                                  | Keyword::Func)
             | TokenKind::Operator(Operator::Minus | Operator::Plus | Operator::Not)
             | TokenKind::Paren(Delimiter::LParen | Delimiter::LBracket))
}
