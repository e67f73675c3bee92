mod common;
use common::*;
use forth::lang::{Aliases, ErrorCode};
use forth::mach::Runtime;

#[test]
fn test_one_level() {
    let mut r = Runtime::default();
    exec(&mut r, "!alias two 1 1 +\n!alias four two two +");
    assert_eq!(exec(&mut r, "two ."), "+ 2\n");
    let (_, result) = run(&mut r, "four");
    let error = result.unwrap_err();
    assert_eq!(error.code(), ErrorCode::MalformedToken);
    assert_eq!(error.to_string(), "MALFORMED TOKEN IN 1:1; `two`");
}

#[test]
fn test_directive_order() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "!alias inc 1 +\n5 inc ."), "+ 6\n");
    assert_eq!(r.aliases().get("inc"), Some("1 +"));
    let (_, result) = run(&mut r, "1 inc\n!unalias inc\ninc");
    assert_eq!(result.unwrap_err().code(), ErrorCode::MalformedToken);
    assert_eq!(r.aliases().get("inc"), Some("1 +"));
    assert!(stack(&r).is_empty());
}

#[test]
fn test_failed_compile_keeps_aliases() {
    let mut r = Runtime::default();
    let (_, result) = run(&mut r, "!alias zz 1\nfrob");
    assert_eq!(result.unwrap_err().code(), ErrorCode::MalformedToken);
    assert_eq!(r.aliases().get("zz"), None);
}

#[test]
fn test_unknown_unalias() {
    let mut r = Runtime::default();
    let (_, result) = run(&mut r, "!unalias nope");
    assert_eq!(result.unwrap_err().code(), ErrorCode::UndefinedAlias);
}

#[test]
fn test_unknown_directive() {
    let mut r = Runtime::default();
    let (_, result) = run(&mut r, "!frob 1 2");
    assert_eq!(result.unwrap_err().code(), ErrorCode::UnknownDirective);
    assert_eq!(exec(&mut r, "1 ! ."), "+ 0\n");
    let (_, result) = run(&mut r, "1\n! .");
    assert_eq!(result.unwrap_err().to_string(), "UNKNOWN DIRECTIVE IN 2:1; !");
    assert!(stack(&r).is_empty());
}

#[test]
fn test_quoted_not_expanded() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "\"sqrt\" ."), "+ sqrt\n");
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aliases.json");
    let mut aliases = Aliases::default();
    aliases.insert("sq", "dup *");
    aliases.save(&path).unwrap();
    let loaded = Aliases::load(&path).unwrap();
    assert_eq!(loaded, aliases);
    assert_eq!(loaded.get("sqrt"), Some("0.5 ^"));

    let mut r = Runtime::new(loaded);
    assert_eq!(exec(&mut r, "5 sq ."), "+ 25\n");
}

#[test]
fn test_load_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = Aliases::load(dir.path().join("missing.json")).unwrap_err();
    assert_eq!(missing.code(), ErrorCode::FileNotFound);
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "[1, 2]").unwrap();
    assert_eq!(Aliases::load(&path).unwrap_err().code(), ErrorCode::IoError);
}
