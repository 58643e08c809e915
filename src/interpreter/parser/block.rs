use std::iter::Peekable;

use crate::{
    ast::Node,
    interpreter::{
        lexer::{Delimiter, Operator, Token, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{end_of_input, expect_delimiter, unexpected},
        },
    },
};

/// Parses a braced sequence of statements.
///
/// Statements are separated by line breaks or `;`. An empty block `{}` is
/// allowed.
///
/// Grammar: `block := "{" (statement ";"?)* "}"`
///
/// # Errors
/// Fails if `{` is missing, a statement fails to parse, or the input ends
/// before the closing `}`.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let open = expect_delimiter(tokens, Delimiter::LBrace)?;
    let mut statements = Vec::new();

    loop {
        let Some(token) = tokens.peek().copied() else {
            return Err(end_of_input());
        };
        match token.kind {
            TokenKind::Paren(Delimiter::RBrace) => {
                tokens.next();
                return Ok(Node::Block { statements,
                                        span: open.span.to(&token.span) });
            },
            TokenKind::Paren(Delimiter::Semicolon) | TokenKind::Newline => {
                tokens.next();
            },
            TokenKind::Eof => return Err(unexpected(token, "'}'")),
            _ => statements.push(parse_statement(tokens)?),
        }
    }
}

/// Parses the body of a control construct or function.
///
/// A body is either a block or the shorthand `-> statement`.
///
/// # Returns
/// The body node, and `true` when the `->` form was used.
pub fn parse_body<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(Node, bool)>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek().copied() {
        Some(Token { kind: TokenKind::Operator(Operator::Arrow),
                     .. }) => {
            tokens.next();
            Ok((parse_statement(tokens)?, true))
        },
        Some(Token { kind: TokenKind::Paren(Delimiter::LBrace),
                     .. }) => Ok((parse_block(tokens)?, false)),
        Some(token) => Err(unexpected(token, "'{' or '->'")),
        None => Err(end_of_input()),
    }
}
