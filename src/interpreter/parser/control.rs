use std::iter::Peekable;

use crate::{
    ast::Node,
    interpreter::{
        lexer::{Delimiter, Keyword, Operator, Token, TokenKind},
        parser::{
            binary::parse_or,
            block::parse_body,
            core::{ParseResult, parse_expression},
            utils::{end_of_input, expect, next_if_kind, parse_identifier, unexpected},
        },
    },
};

/// Parses an `if` expression with optional `elif` and `else` branches.
///
/// `else if` is accepted as a spelling of `elif`.
///
/// Grammar: `if := "if" expression body ("elif" expression body)* ("else" (body | if))?`
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let start = expect(tokens, &TokenKind::Keyword(Keyword::If), "'if'")?;
    let mut cases = Vec::new();

    let condition = parse_expression(tokens)?;
    let (body, _) = parse_body(tokens)?;
    let mut end = body.span().clone();
    cases.push((condition, body));

    while next_if_kind(tokens, &TokenKind::Keyword(Keyword::Elif)).is_some() {
        let condition = parse_expression(tokens)?;
        let (body, _) = parse_body(tokens)?;
        end = body.span().clone();
        cases.push((condition, body));
    }

    let else_case = if next_if_kind(tokens, &TokenKind::Keyword(Keyword::Else)).is_some() {
        let body = match tokens.peek().copied() {
            Some(token) if token.is(&TokenKind::Keyword(Keyword::If)) => parse_if(tokens)?,
            _ => parse_body(tokens)?.0,
        };
        end = body.span().clone();
        Some(Box::new(body))
    } else {
        None
    };

    Ok(Node::If { cases,
                  else_case,
                  span: start.span.to(&end) })
}

/// Parses a counting loop.
///
/// Grammar: `for := "for" IDENT "=" or (":" | "to") expression ("by" expression)? body`
///
/// # Example
/// ```text
/// for i = 0 to 10 by 2 -> println(i)
/// for i = 3 : 1 by -1 { println(i) }
/// ```
pub fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let start = expect(tokens, &TokenKind::Keyword(Keyword::For), "'for'")?;
    let (var, _) = parse_identifier(tokens)?;
    expect(tokens, &TokenKind::Operator(Operator::Assign), "'='")?;
    let from = parse_or(tokens)?;

    match tokens.next() {
        Some(Token { kind:
                         TokenKind::Paren(Delimiter::Colon) | TokenKind::Keyword(Keyword::To),
                     .. }) => {},
        Some(token) => return Err(unexpected(token, "':' or 'to'")),
        None => return Err(end_of_input()),
    }
    let to = parse_expression(tokens)?;

    let step = if next_if_kind(tokens, &TokenKind::Keyword(Keyword::By)).is_some() {
        Some(Box::new(parse_expression(tokens)?))
    } else {
        None
    };
    let (body, _) = parse_body(tokens)?;
    let span = start.span.to(body.span());

    Ok(Node::For { var,
                   from: Box::new(from),
                   to: Box::new(to),
                   step,
                   body: Box::new(body),
                   span })
}

/// Parses a loop over the elements of a list.
///
/// Grammar: `each := "each" IDENT "in" expression body`
pub fn parse_each<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let start = expect(tokens, &TokenKind::Keyword(Keyword::Each), "'each'")?;
    let (item, _) = parse_identifier(tokens)?;
    expect(tokens, &TokenKind::Keyword(Keyword::In), "'in'")?;
    let list = parse_expression(tokens)?;
    let (body, _) = parse_body(tokens)?;
    let span = start.span.to(body.span());

    Ok(Node::Each { item,
                    list: Box::new(list),
                    body: Box::new(body),
                    span })
}

/// Grammar: `while := "while" expression body`
pub fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let start = expect(tokens, &TokenKind::Keyword(Keyword::While), "'while'")?;
    let condition = parse_expression(tokens)?;
    let (body, _) = parse_body(tokens)?;
    let span = start.span.to(body.span());

    Ok(Node::While { condition: Box::new(condition),
                     body: Box::new(body),
                     span })
}
