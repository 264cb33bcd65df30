//! Integration tests for the public lexer API.
//!
//! These tests drive the crate the way a parser would: through the
//! re-exported `tokenize` functions and the error rendering helpers.

use exprlex::{
    errors::errors::ErrorImpl, render_error, tokenize, tokenize_with, NumberPolicy, Scanner,
    Token, TokenKind,
};

#[test]
fn test_samples_tokenize() {
    let samples = [
        ("age >= 123", 3),
        ("  age    >=    123    ", 3),
        ("age     >= 123   ", 3),
        ("a113g_e > 0", 3),
        ("0-1+22/33*5", 9),
    ];

    for (source, count) in samples {
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.len(), count, "{}", source);
    }
}

#[test]
fn test_padding_does_not_change_tokens() {
    let base = tokenize("age>=123").unwrap();

    for width in 1..=10 {
        let pad = " ".repeat(width);
        let source = format!("{pad}age{pad}>={pad}123{pad}");
        assert_eq!(tokenize(&source).unwrap(), base);
    }
}

#[test]
fn test_manual_step_matches_tokenize() {
    let source = "rate*12 >= limit";
    let mut scanner = Scanner::new(NumberPolicy::Strict);
    let mut tokens = vec![];

    for (position, c) in source.chars().enumerate() {
        let (next, sealed) = scanner.step(c, position as u32).unwrap();
        tokens.extend(sealed);
        scanner = next;
    }
    tokens.extend(scanner.finish());

    assert_eq!(tokens, tokenize(source).unwrap());
    assert_eq!(tokens[3], Token::new(TokenKind::GE, ">="));
}

#[test]
fn test_policies_differ_on_number_followed_by_letter() {
    assert!(matches!(
        tokenize_with("12a", NumberPolicy::Strict).unwrap_err().kind(),
        ErrorImpl::IllegalNumber { .. }
    ));
    assert_eq!(tokenize_with("12a", NumberPolicy::Lenient).unwrap().len(), 2);
}

#[test]
fn test_threads_scan_independently() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("x{i} > {i}");
                tokenize(&source).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let tokens = handle.join().unwrap();
        assert_eq!(tokens[0].value, format!("x{i}"));
        assert_eq!(tokens[2].value, i.to_string());
    }
}

#[test]
fn test_render_error_for_failed_scan() {
    let source = "limit >= 10\nvalue > 3 ? 4";
    let error = tokenize(source).unwrap_err();
    let rendered = render_error(&error, source, "rules.expr");

    assert_eq!(
        rendered,
        "Error: IllegalCharacter (Unexpected character `?`)\n\
         -> rules.expr\n  \
         |\n\
         2 | value > 3 ? 4\n  \
         | ----------^\n"
    );
}
