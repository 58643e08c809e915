use std::iter::Peekable;

use crate::{
    ast::Node,
    interpreter::{
        lexer::{Delimiter, Keyword, Operator, Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{can_start_expression, end_of_input, expect, expect_delimiter, next_if_kind},
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses a single statement.
///
/// A statement is one of:
/// - `return` with an optional value,
/// - `break` or `continue`,
/// - a variable assignment `name = value`,
/// - an element assignment `name[index] = value`,
/// - any expression.
///
/// Assignments are recognised by looking ahead on a cloned iterator, so
/// `x` and `x[0]` on their own still parse as expressions.
///
/// # Errors
/// Returns an `Invalid Syntax` error if the statement is malformed.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    ensure_sufficient_stack(|| {
        let Some(token) = tokens.peek().copied() else {
            return Err(end_of_input());
        };

        match token.kind {
            TokenKind::Keyword(Keyword::Return) => {
                tokens.next();
                let value = match tokens.peek().copied() {
                    Some(next) if can_start_expression(&next.kind) => {
                        Some(Box::new(parse_expression(tokens)?))
                    },
                    _ => None,
                };
                let span = value.as_ref().map_or_else(|| token.span.clone(),
                                                      |value| token.span.to(value.span()));
                Ok(Node::Return { value, span })
            },
            TokenKind::Keyword(Keyword::Break) => {
                tokens.next();
                Ok(Node::Break { span: token.span.clone() })
            },
            TokenKind::Keyword(Keyword::Continue) => {
                tokens.next();
                Ok(Node::Continue { span: token.span.clone() })
            },
            _ => match parse_assignment(tokens)? {
                Some(assignment) => Ok(assignment),
                None => parse_expression(tokens),
            },
        }
    })
}

/// Parses `name = value` or `name[index] = value` if the upcoming tokens
/// form one.
///
/// The value of an assignment may itself be an assignment, so `a = b = 1`
/// binds both names.
///
/// # Returns
/// - `Ok(Some(Node::VarAssign))` or `Ok(Some(Node::ElementAssign))` when an
///   assignment is present,
/// - `Ok(None)` otherwise, with no tokens consumed.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Node>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(Token { kind: TokenKind::Identifier(name),
                     span: start, }) = tokens.peek().copied()
    else {
        return Ok(None);
    };

    let mut lookahead = tokens.clone();
    lookahead.next();
    match lookahead.peek().copied().map(|token| &token.kind) {
        Some(TokenKind::Operator(Operator::Assign)) => {
            tokens.next();
            tokens.next();
            let value = parse_assignment_value(tokens)?;
            let span = start.to(value.span());

            Ok(Some(Node::VarAssign { name: name.clone(),
                                      value: Box::new(value),
                                      span }))
        },
        Some(TokenKind::Paren(Delimiter::LBracket)) => {
            if !is_element_assignment(lookahead) {
                return Ok(None);
            }
            tokens.next();
            tokens.next();
            let index = parse_expression(tokens)?;
            expect_delimiter(tokens, Delimiter::RBracket)?;
            expect(tokens, &TokenKind::Operator(Operator::Assign), "'='")?;
            let value = parse_assignment_value(tokens)?;
            let span = start.to(value.span());

            Ok(Some(Node::ElementAssign { name: name.clone(),
                                          index: Box::new(index),
                                          value: Box::new(value),
                                          span }))
        },
        _ => Ok(None),
    }
}

fn parse_assignment_value<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    match parse_assignment(tokens)? {
        Some(assignment) => Ok(assignment),
        None => parse_expression(tokens),
    }
}

/// Scans past the bracketed index starting at `[` and reports whether `=`
/// follows the matching `]`.
fn is_element_assignment<'a, I>(mut lookahead: Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token>
{
    let mut depth = 0usize;
    while let Some(token) = lookahead.next() {
        match token.kind {
            TokenKind::Paren(Delimiter::LBracket) => depth += 1,
            TokenKind::Paren(Delimiter::RBracket) => {
                depth -= 1;
                if depth == 0 {
                    let assign = TokenKind::Operator(Operator::Assign);
                    return next_if_kind(&mut lookahead, &assign).is_some();
                }
            },
            TokenKind::Eof => return false,
            _ => {},
        }
    }
    false
}
