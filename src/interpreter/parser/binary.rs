use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::{Delimiter, Operator, Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            unary::parse_unary,
            utils::{expect_delimiter, next_if_kind},
        },
    },
};

/// Parses a conditional expression `condition ? left : right`.
///
/// The ternary binds loosest of all operators and nests to the right, so
/// `a ? b : c ? d : e` reads as `a ? b : (c ? d : e)`.
///
/// Grammar: `ternary := or ("?" expression ":" expression)?`
pub fn parse_ternary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let condition = parse_or(tokens)?;
    if next_if_kind(tokens, &TokenKind::Operator(Operator::Question)).is_none() {
        return Ok(condition);
    }

    let left = parse_expression(tokens)?;
    expect_delimiter(tokens, Delimiter::Colon)?;
    let right = parse_expression(tokens)?;
    let span = condition.span().to(right.span());

    Ok(Node::Ternary { condition: Box::new(condition),
                       left: Box::new(left),
                       right: Box::new(right),
                       span })
}

/// Parses a left-associative chain of `or`.
///
/// Grammar: `or := and ("or" and)*`
pub fn parse_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_binary_chain(tokens, parse_and, |op| op == BinaryOperator::Or)
}

/// Grammar: `and := equality ("and" equality)*`
pub fn parse_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_binary_chain(tokens, parse_equality, |op| op == BinaryOperator::And)
}

/// Grammar: `equality := relational (("==" | "!=") relational)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_binary_chain(tokens, parse_relational, |op| {
        matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
    })
}

/// Grammar: `relational := additive (("<" | "<=" | ">" | ">=") additive)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_binary_chain(tokens, parse_additive, |op| {
        matches!(op,
                 BinaryOperator::Less
                 | BinaryOperator::LessEqual
                 | BinaryOperator::Greater
                 | BinaryOperator::GreaterEqual)
    })
}

/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_binary_chain(tokens, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Grammar: `multiplicative := power (("*" | "/" | "%") power)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_binary_chain(tokens, parse_power, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
    })
}

/// Parses exponentiation.
///
/// `^` is left-associative and its operands are unary expressions, so
/// `2^3^2` is `(2^3)^2` and `-2^2` is `(-2)^2`.
///
/// Grammar: `power := unary ("^" unary)*`
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_binary_chain(tokens, parse_unary, |op| op == BinaryOperator::Pow)
}

/// Parses `operand (op operand)*` for the operators `accepts` admits,
/// folding to the left.
fn parse_binary_chain<'a, I>(tokens: &mut Peekable<I>,
                             parse_operand: fn(&mut Peekable<I>) -> ParseResult<Node>,
                             accepts: fn(BinaryOperator) -> bool)
                             -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_operand(tokens)?;

    while let Some(token) = tokens.peek().copied()
          && let Some(op) = token_to_binary_operator(&token.kind)
          && accepts(op)
    {
        tokens.next();
        let right = parse_operand(tokens)?;
        let span = left.span().to(right.span());
        left = Node::BinaryOp { op,
                                left: Box::new(left),
                                right: Box::new(right),
                                span };
    }

    Ok(left)
}

/// Maps an operator token to the binary operator it denotes, if any.
pub(in crate::interpreter::parser) const fn token_to_binary_operator(kind: &TokenKind)
                                                                     -> Option<BinaryOperator> {
    let TokenKind::Operator(op) = kind else {
        return None;
    };
    match op {
        Operator::Plus => Some(BinaryOperator::Add),
        Operator::Minus => Some(BinaryOperator::Sub),
        Operator::Star => Some(BinaryOperator::Mul),
        Operator::Slash => Some(BinaryOperator::Div),
        Operator::Percent => Some(BinaryOperator::Mod),
        Operator::Caret => Some(BinaryOperator::Pow),
        Operator::EqualEqual => Some(BinaryOperator::Equal),
        Operator::BangEqual => Some(BinaryOperator::NotEqual),
        Operator::Greater => Some(BinaryOperator::Greater),
        Operator::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Operator::Less => Some(BinaryOperator::Less),
        Operator::LessEqual => Some(BinaryOperator::LessEqual),
        Operator::And => Some(BinaryOperator::And),
        Operator::Or => Some(BinaryOperator::Or),
        Operator::Question | Operator::Assign | Operator::Arrow | Operator::Not => None,
    }
}
