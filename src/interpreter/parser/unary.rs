use std::iter::Peekable;

use crate::{
    ast::{Node, UnaryOperator},
    interpreter::{
        lexer::{Delimiter, Keyword, Operator, Token, TokenKind},
        parser::{
            control::{parse_each, parse_for, parse_if, parse_while},
            core::{ParseResult, parse_expression},
            function::parse_function_definition,
            utils::{end_of_input, expect_delimiter, next_if_kind, parse_comma_separated, unexpected},
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses a prefix operator applied to a unary expression, or a postfix
/// expression.
///
/// Grammar: `unary := ("-" | "+" | "not") unary | postfix`
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(end_of_input());
    };
    let op = match token.kind {
        TokenKind::Operator(Operator::Minus) => UnaryOperator::Negate,
        TokenKind::Operator(Operator::Plus) => UnaryOperator::Identity,
        TokenKind::Operator(Operator::Not) => UnaryOperator::Not,
        _ => {
            let primary = parse_primary(tokens)?;
            return parse_postfix(tokens, primary);
        },
    };
    tokens.next();

    let operand = ensure_sufficient_stack(|| parse_unary(tokens))?;
    let span = token.span.to(operand.span());

    Ok(Node::UnaryOp { op,
                       operand: Box::new(operand),
                       span })
}

/// Applies any number of calls `(args)`, index accesses `[i]` and slices
/// `[a:b]` to `node`.
///
/// Grammar: `postfix := primary ( "(" args ")" | "[" expression (":" expression)? "]" )*`
pub fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut node: Node) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    loop {
        if next_if_kind(tokens, &TokenKind::Paren(Delimiter::LParen)).is_some() {
            let (arguments, close) =
                parse_comma_separated(tokens, parse_expression, Delimiter::RParen)?;
            let span = node.span().to(&close);
            node = Node::FunctionCall { callee: Box::new(node),
                                        arguments,
                                        span };
        } else if next_if_kind(tokens, &TokenKind::Paren(Delimiter::LBracket)).is_some() {
            let index = parse_expression(tokens)?;
            let to = if next_if_kind(tokens, &TokenKind::Paren(Delimiter::Colon)).is_some() {
                Some(Box::new(parse_expression(tokens)?))
            } else {
                None
            };
            let close = expect_delimiter(tokens, Delimiter::RBracket)?;
            let span = node.span().to(&close.span);
            node = Node::ElementAccess { target: Box::new(node),
                                         index: Box::new(index),
                                         to,
                                         span };
        } else {
            return Ok(node);
        }
    }
}

/// Parses a primary expression: a literal, a variable, a parenthesised
/// expression, a list literal, or one of the expression-valued constructs
/// `if`, `for`, `each`, `while` and `func`.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(end_of_input());
    };
    let span = token.span.clone();

    match &token.kind {
        TokenKind::Number(value) => {
            tokens.next();
            Ok(Node::Number { value: *value,
                              span })
        },
        TokenKind::String(value) => {
            tokens.next();
            Ok(Node::String { value: value.clone(),
                              span })
        },
        TokenKind::Identifier(name) => {
            tokens.next();
            Ok(Node::VarAccess { name: name.clone(),
                                 span })
        },
        TokenKind::Keyword(Keyword::Null) => {
            tokens.next();
            Ok(Node::Null { span })
        },
        TokenKind::Keyword(Keyword::If) => parse_if(tokens),
        TokenKind::Keyword(Keyword::For) => parse_for(tokens),
        TokenKind::Keyword(Keyword::Each) => parse_each(tokens),
        TokenKind::Keyword(Keyword::While) => parse_while(tokens),
        TokenKind::Keyword(Keyword::Func) => parse_function_definition(tokens),
        TokenKind::Paren(Delimiter::LParen) => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect_delimiter(tokens, Delimiter::RParen)?;
            Ok(expr)
        },
        TokenKind::Paren(Delimiter::LBracket) => {
            tokens.next();
            let (elements, close) =
                parse_comma_separated(tokens, parse_expression, Delimiter::RBracket)?;
            Ok(Node::List { elements,
                            span: span.to(&close) })
        },
        _ => Err(unexpected(token, "an expression")),
    }
}
