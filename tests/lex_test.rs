mod common;
use common::*;
use forth::lang::{lex, ErrorCode};
use forth::mach::Runtime;

#[test]
fn test_whitespace() {
    let tokens = lex("  1\t2   +  ", 1).unwrap();
    let text: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(text, ["1", "2", "+"]);
}

#[test]
fn test_quoted_spaces() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "\"a b  c\" ."), "+ a b  c\n");
}

#[test]
fn test_comments() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "// nothing here"), "");
    assert_eq!(exec(&mut r, "1 . // 2 ."), "+ 1\n");
    assert_eq!(exec(&mut r, "\"a // b\" ."), "+ a // b\n");
}

#[test]
fn test_escapes() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, r#""say \"hi\"" ."#), "+ say \"hi\"\n");
    assert_eq!(exec(&mut r, r#""back\\slash" ."#), "+ back\\slash\n");
}

#[test]
fn test_unterminated() {
    let mut r = Runtime::default();
    let (out, result) = run(&mut r, "1 . \"abc");
    assert_eq!(out, "");
    assert_eq!(result.unwrap_err().code(), ErrorCode::UnterminatedString);
}

#[test]
fn test_malformed() {
    let mut r = Runtime::default();
    let (_, result) = run(&mut r, "1 2 frob");
    assert_eq!(
        result.unwrap_err().to_string(),
        "MALFORMED TOKEN IN 1:5; `frob`"
    );
    let (_, result) = run(&mut r, "1.2.3");
    assert_eq!(result.unwrap_err().code(), ErrorCode::MalformedToken);
}

#[test]
fn test_multiline_locations() {
    let mut r = Runtime::default();
    let (out, result) = run(&mut r, "1 .\n\n  drop");
    assert_eq!(out, "+ 1\n");
    assert_eq!(result.unwrap_err().to_string(), "STACK UNDERFLOW IN 3:3");
}
