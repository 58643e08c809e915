use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{FunctionDef, Node},
    interpreter::{
        lexer::{Delimiter, Keyword, Token, TokenKind},
        parser::{
            block::parse_body,
            core::ParseResult,
            utils::{expect, expect_delimiter, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a function literal.
///
/// The name is optional; a named function is also bound to its name when
/// evaluated. The body is either `-> statement` or a block.
///
/// Grammar: `funcdef := "func" IDENT? "(" (IDENT ("," IDENT)*)? ")" body`
///
/// # Example
/// ```
/// use luminary::{
///     ast::Node,
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("func add(a, b) -> a + b", "<stdin>").unwrap();
/// let Node::Block { statements, .. } = parse(&tokens).unwrap() else {
///     panic!("expected a block");
/// };
/// let Node::FunctionDef(def) = &statements[0] else {
///     panic!("expected a function definition");
/// };
/// assert_eq!(def.name.as_deref(), Some("add"));
/// assert_eq!(def.params, ["a", "b"]);
/// assert!(def.is_expression_body);
/// ```
pub fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let start = expect(tokens, &TokenKind::Keyword(Keyword::Func), "'func'")?;

    let name = match tokens.peek().copied() {
        Some(Token { kind: TokenKind::Identifier(name),
                     .. }) => {
            let name = name.clone();
            tokens.next();
            Some(name)
        },
        _ => None,
    };

    expect_delimiter(tokens, Delimiter::LParen)?;
    let (params, _) = parse_comma_separated(tokens,
                                            |tokens| parse_identifier(tokens).map(|(name, _)| name),
                                            Delimiter::RParen)?;
    let (body, is_expression_body) = parse_body(tokens)?;
    let span = start.span.to(body.span());

    Ok(Node::FunctionDef(Rc::new(FunctionDef { name,
                                               params,
                                               body,
                                               is_expression_body,
                                               span })))
}
