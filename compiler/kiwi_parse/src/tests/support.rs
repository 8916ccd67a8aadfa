//! Token streams for grammar tests.
//!
//! A deliberately tiny scanner: `\n` is NEWLINE, `{` and `}` stand for
//! INDENT and DEDENT, identifiers, digit runs and `"..."` strings become
//! NAME, NUMBER and STRING, and everything else is an operator (longest
//! match among the two-character operators first). Spaces separate tokens.
//! A final NEWLINE is added if the source does not end with one, the way a
//! tokenizer terminates the last logical line.

use kiwi_ir::{AstRenderer, Span, StringInterner, Token, TokenKind, TokenList};

use crate::{GrammarConfig, ParseError, ParseOutput, Parser};

const TWO_CHAR_OPERATORS: &[&str] = &[
    "**", "==", "!=", "<=", ">=", "+=", "-=", "*=", "/=", "%=", "->",
];

pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    let mut tokens = TokenList::new();
    let mut chars = source.char_indices().peekable();
    let span = |start: usize, end: usize| Span::new(start as u32, end as u32);

    while let Some((start, c)) = chars.next() {
        let mut end = start + c.len_utf8();
        let token = match c {
            ' ' | '\t' => continue,
            '\n' => Token::marker(TokenKind::Newline, span(start, end)),
            '{' => Token::marker(TokenKind::Indent, span(start, end)),
            '}' => Token::marker(TokenKind::Dedent, span(start, end)),
            '"' => {
                for (i, c) in chars.by_ref() {
                    end = i + c.len_utf8();
                    if c == '"' {
                        break;
                    }
                }
                let text = &source[start + 1..end - 1];
                Token::new(TokenKind::String, interner.intern(text), span(start, end))
            }
            c if c.is_ascii_digit() => {
                while let Some(&(i, c)) = chars.peek() {
                    if !c.is_ascii_digit() {
                        break;
                    }
                    end = i + 1;
                    chars.next();
                }
                Token::new(TokenKind::Number, interner.intern(&source[start..end]), span(start, end))
            }
            c if c.is_alphabetic() || c == '_' => {
                while let Some(&(i, c)) = chars.peek() {
                    if !(c.is_alphanumeric() || c == '_') {
                        break;
                    }
                    end = i + c.len_utf8();
                    chars.next();
                }
                Token::new(TokenKind::Name, interner.intern(&source[start..end]), span(start, end))
            }
            _ => {
                let rest = &source[start..];
                if let Some(op) = TWO_CHAR_OPERATORS.iter().find(|op| rest.starts_with(**op)) {
                    chars.next();
                    end = start + op.len();
                }
                Token::new(TokenKind::Op, interner.intern(&source[start..end]), span(start, end))
            }
        };
        tokens.push(token);
    }

    if !source.is_empty() && !source.ends_with('\n') {
        let end = source.len() as u32;
        tokens.push(Token::marker(TokenKind::Newline, Span::point(end)));
    }
    tokens.finish();
    tokens
}

pub fn try_parse(source: &str, interner: &StringInterner) -> Result<ParseOutput, ParseError> {
    let tokens = lex(source, interner);
    crate::parse(&tokens, interner)
}

/// Parse `source` as a module and render it without `Expression` wrappers.
pub fn render(source: &str) -> String {
    let interner = StringInterner::new();
    let output = try_parse(source, &interner)
        .unwrap_or_else(|err| panic!("failed to parse {source:?}: {err}"));
    AstRenderer::new(&output.arena, &interner)
        .elide_wrappers(true)
        .module(&output.module)
}

/// Parse `source` as a module and render it with every node.
pub fn render_full(source: &str) -> String {
    let interner = StringInterner::new();
    let output = try_parse(source, &interner)
        .unwrap_or_else(|err| panic!("failed to parse {source:?}: {err}"));
    AstRenderer::new(&output.arena, &interner).module(&output.module)
}

/// Render the single statement `source` parses to.
pub fn render_stmt(source: &str) -> String {
    let interner = StringInterner::new();
    let output = try_parse(source, &interner)
        .unwrap_or_else(|err| panic!("failed to parse {source:?}: {err}"));
    assert!(output.module.imports.is_empty());
    assert_eq!(output.module.statements.len(), 1, "{source:?}");
    AstRenderer::new(&output.arena, &interner)
        .elide_wrappers(true)
        .stmt(output.module.statements[0])
}

/// Parse `source` with `parse_expression` and render it.
pub fn render_expr(source: &str) -> String {
    let interner = StringInterner::new();
    let tokens = lex(source, &interner);
    let output = Parser::new(&tokens, &interner)
        .parse_expression()
        .unwrap_or_else(|err| panic!("failed to parse {source:?}: {err}"));
    AstRenderer::new(&output.arena, &interner)
        .elide_wrappers(true)
        .expr(output.expr)
}

pub fn parse_err(source: &str) -> ParseError {
    parse_err_with(source, &GrammarConfig::kiwi())
}

pub fn parse_err_with(source: &str, config: &GrammarConfig) -> ParseError {
    let interner = StringInterner::new();
    let tokens = lex(source, &interner);
    match crate::parse_with_config(&tokens, &interner, config) {
        Ok(output) => panic!(
            "{source:?} parsed unexpectedly: {}",
            AstRenderer::new(&output.arena, &interner).module(&output.module)
        ),
        Err(err) => err,
    }
}

#[test]
fn scanner_produces_layout_markers() {
    let interner = StringInterner::new();
    let tokens = lex("if a:\n{x += 1\n}\n", &interner);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Name,
            TokenKind::Name,
            TokenKind::Op,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Name,
            TokenKind::Op,
            TokenKind::Number,
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::Newline,
            TokenKind::EndMarker,
        ]
    );
    assert_eq!(interner.lookup(tokens[6].text), "+=");
}
