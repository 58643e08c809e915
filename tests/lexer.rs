use luminary::{
    error::ErrorKind,
    interpreter::lexer::{Delimiter, Keyword, Operator, TokenKind, tokenize},
};
use pretty_assertions::assert_eq;

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src, "test.lum").unwrap_or_else(|e| panic!("lexing failed: {e}"))
                             .into_iter()
                             .map(|token| token.kind)
                             .collect()
}

#[test]
fn arithmetic_tokens() {
    assert_eq!(kinds("1+2*3"),
               vec![TokenKind::Number(1.0),
                    TokenKind::Operator(Operator::Plus),
                    TokenKind::Number(2.0),
                    TokenKind::Operator(Operator::Star),
                    TokenKind::Number(3.0),
                    TokenKind::Eof]);
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("  // only a comment\n"), vec![TokenKind::Eof]);
}

#[test]
fn numbers() {
    assert_eq!(kinds("0 42 3.25"),
               vec![TokenKind::Number(0.0),
                    TokenKind::Number(42.0),
                    TokenKind::Number(3.25),
                    TokenKind::Eof]);
}

#[test]
fn strings_resolve_escapes() {
    assert_eq!(kinds(r#""a\"b" 'c\'d' "tab\there""#),
               vec![TokenKind::String("a\"b".into()),
                    TokenKind::String("c'd".into()),
                    TokenKind::String("tab\there".into()),
                    TokenKind::Eof]);
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(kinds("if elif else for to by each in while break continue func return null"),
               vec![TokenKind::Keyword(Keyword::If),
                    TokenKind::Keyword(Keyword::Elif),
                    TokenKind::Keyword(Keyword::Else),
                    TokenKind::Keyword(Keyword::For),
                    TokenKind::Keyword(Keyword::To),
                    TokenKind::Keyword(Keyword::By),
                    TokenKind::Keyword(Keyword::Each),
                    TokenKind::Keyword(Keyword::In),
                    TokenKind::Keyword(Keyword::While),
                    TokenKind::Keyword(Keyword::Break),
                    TokenKind::Keyword(Keyword::Continue),
                    TokenKind::Keyword(Keyword::Func),
                    TokenKind::Keyword(Keyword::Return),
                    TokenKind::Keyword(Keyword::Null),
                    TokenKind::Eof]);
    assert_eq!(kinds("iffy index _tmp2 format"),
               vec![TokenKind::Identifier("iffy".into()),
                    TokenKind::Identifier("index".into()),
                    TokenKind::Identifier("_tmp2".into()),
                    TokenKind::Identifier("format".into()),
                    TokenKind::Eof]);
}

#[test]
fn operators_prefer_the_longest_match() {
    assert_eq!(kinds("== != >= <= -> = > < - ? and or not"),
               vec![TokenKind::Operator(Operator::EqualEqual),
                    TokenKind::Operator(Operator::BangEqual),
                    TokenKind::Operator(Operator::GreaterEqual),
                    TokenKind::Operator(Operator::LessEqual),
                    TokenKind::Operator(Operator::Arrow),
                    TokenKind::Operator(Operator::Assign),
                    TokenKind::Operator(Operator::Greater),
                    TokenKind::Operator(Operator::Less),
                    TokenKind::Operator(Operator::Minus),
                    TokenKind::Operator(Operator::Question),
                    TokenKind::Operator(Operator::And),
                    TokenKind::Operator(Operator::Or),
                    TokenKind::Operator(Operator::Not),
                    TokenKind::Eof]);
}

#[test]
fn delimiters() {
    assert_eq!(kinds("()[]{},:;"),
               vec![TokenKind::Paren(Delimiter::LParen),
                    TokenKind::Paren(Delimiter::RParen),
                    TokenKind::Paren(Delimiter::LBracket),
                    TokenKind::Paren(Delimiter::RBracket),
                    TokenKind::Paren(Delimiter::LBrace),
                    TokenKind::Paren(Delimiter::RBrace),
                    TokenKind::Paren(Delimiter::Comma),
                    TokenKind::Paren(Delimiter::Colon),
                    TokenKind::Paren(Delimiter::Semicolon),
                    TokenKind::Eof]);
}

#[test]
fn comments_are_skipped() {
    assert_eq!(kinds("x // comment\ny"),
               vec![TokenKind::Identifier("x".into()),
                    TokenKind::Newline,
                    TokenKind::Identifier("y".into()),
                    TokenKind::Eof]);
    assert_eq!(kinds("8 / 2"),
               vec![TokenKind::Number(8.0),
                    TokenKind::Operator(Operator::Slash),
                    TokenKind::Number(2.0),
                    TokenKind::Eof]);
}

#[test]
fn tokens_carry_positions() {
    let tokens = tokenize("x = 10\n  y", "main.lum").unwrap();

    let ten = &tokens[2];
    assert_eq!(ten.kind, TokenKind::Number(10.0));
    assert_eq!((ten.span.start.line, ten.span.start.col, ten.span.start.index), (1, 4, 4));
    assert_eq!((ten.span.end.line, ten.span.end.col, ten.span.end.index), (1, 6, 6));

    let newline = &tokens[3];
    assert_eq!(newline.kind, TokenKind::Newline);
    assert_eq!((newline.span.start.line, newline.span.start.col), (1, 6));

    let y = &tokens[4];
    assert_eq!((y.span.start.line, y.span.start.col, y.span.start.index), (2, 2, 9));
    assert_eq!(&*y.span.start.file, "main.lum");

    let eof = &tokens[5];
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!((eof.span.start.line, eof.span.start.col), (2, 3));
    assert_eq!(eof.span.end.col, 4);
}

#[test]
fn line_breaks_end_statements() {
    assert_eq!(kinds("x = 5\n-1"),
               vec![TokenKind::Identifier("x".into()),
                    TokenKind::Operator(Operator::Assign),
                    TokenKind::Number(5.0),
                    TokenKind::Newline,
                    TokenKind::Operator(Operator::Minus),
                    TokenKind::Number(1.0),
                    TokenKind::Eof]);
    assert_eq!(kinds("a\n\n\nb\n"),
               vec![TokenKind::Identifier("a".into()),
                    TokenKind::Newline,
                    TokenKind::Identifier("b".into()),
                    TokenKind::Eof]);
    assert_eq!(kinds("\n\nreturn\n(x)"),
               vec![TokenKind::Keyword(Keyword::Return),
                    TokenKind::Newline,
                    TokenKind::Paren(Delimiter::LParen),
                    TokenKind::Identifier("x".into()),
                    TokenKind::Paren(Delimiter::RParen),
                    TokenKind::Eof]);
}

#[test]
fn line_breaks_inside_an_expression_are_dropped() {
    assert_eq!(kinds("f(1,\n  2\n)"),
               vec![TokenKind::Identifier("f".into()),
                    TokenKind::Paren(Delimiter::LParen),
                    TokenKind::Number(1.0),
                    TokenKind::Paren(Delimiter::Comma),
                    TokenKind::Number(2.0),
                    TokenKind::Paren(Delimiter::RParen),
                    TokenKind::Eof]);
    assert_eq!(kinds("[a\n-b]"),
               vec![TokenKind::Paren(Delimiter::LBracket),
                    TokenKind::Identifier("a".into()),
                    TokenKind::Operator(Operator::Minus),
                    TokenKind::Identifier("b".into()),
                    TokenKind::Paren(Delimiter::RBracket),
                    TokenKind::Eof]);
    assert_eq!(kinds("a +\nb\n* c"),
               vec![TokenKind::Identifier("a".into()),
                    TokenKind::Operator(Operator::Plus),
                    TokenKind::Identifier("b".into()),
                    TokenKind::Operator(Operator::Star),
                    TokenKind::Identifier("c".into()),
                    TokenKind::Eof]);
    assert_eq!(kinds("{ 1 }\nelse"),
               vec![TokenKind::Paren(Delimiter::LBrace),
                    TokenKind::Number(1.0),
                    TokenKind::Paren(Delimiter::RBrace),
                    TokenKind::Keyword(Keyword::Else),
                    TokenKind::Eof]);
}

#[test]
fn line_breaks_count_inside_nested_blocks() {
    assert_eq!(kinds("f(func () {\na\nb\n})"),
               vec![TokenKind::Identifier("f".into()),
                    TokenKind::Paren(Delimiter::LParen),
                    TokenKind::Keyword(Keyword::Func),
                    TokenKind::Paren(Delimiter::LParen),
                    TokenKind::Paren(Delimiter::RParen),
                    TokenKind::Paren(Delimiter::LBrace),
                    TokenKind::Identifier("a".into()),
                    TokenKind::Newline,
                    TokenKind::Identifier("b".into()),
                    TokenKind::Paren(Delimiter::RBrace),
                    TokenKind::Paren(Delimiter::RParen),
                    TokenKind::Eof]);
}

#[test]
fn columns_count_characters() {
    let tokens = tokenize("\"héllo\" x", "main.lum").unwrap();
    let x = &tokens[1];
    assert_eq!(x.span.start.col, 8);
    assert_eq!(x.span.start.index, 9);
}

#[test]
fn illegal_characters() {
    let err = tokenize("x = 1 $ 2", "main.lum").unwrap_err();
    assert_eq!(err.kind, ErrorKind::IllegalChar);
    assert_eq!(err.details, "'$'");
    let span = err.span.unwrap();
    assert_eq!((span.start.line, span.start.col, span.end.col), (1, 6, 7));

    let err = tokenize("!x", "main.lum").unwrap_err();
    assert_eq!(err.kind, ErrorKind::IllegalChar);
    assert_eq!(err.details, "'!'");
}

#[test]
fn unterminated_strings_are_illegal() {
    let err = tokenize("\"never closed", "main.lum").unwrap_err();
    assert_eq!(err.kind, ErrorKind::IllegalChar);
    assert_eq!(err.details, "'\"'");
}
