use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use xtool_demo::cli::{Args, Command, RenameArgs};

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("xtool")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_new_with_name() {
    let parsed = Args::try_parse_from(make_args(&["new", "Hello-App"])).unwrap();
    assert_eq!(
        parsed.command,
        Some(Command::New { name: Some("Hello-App".to_string()), rest: vec![] })
    );
    assert!(!parsed.verbose);
}

#[test]
fn test_new_without_name() {
    let parsed = Args::try_parse_from(make_args(&["new"])).unwrap();
    assert_eq!(parsed.command, Some(Command::New { name: None, rest: vec![] }));
}

#[test]
fn test_new_ignores_extra_args() {
    let parsed = Args::try_parse_from(make_args(&["new", "a", "b"])).unwrap();
    match parsed.command {
        Some(Command::New { name, .. }) => assert_eq!(name.as_deref(), Some("a")),
        other => panic!("Expected New, got {other:?}"),
    }
}

#[test]
fn test_flags() {
    let parsed = Args::try_parse_from(make_args(&["--version"])).unwrap();
    assert!(parsed.version);
    assert!(parsed.command.is_none());

    let parsed = Args::try_parse_from(make_args(&["-h"])).unwrap();
    assert!(parsed.help);

    let parsed = Args::try_parse_from(make_args(&["dev", "--verbose"])).unwrap();
    assert!(parsed.verbose);
    assert_eq!(parsed.command, Some(Command::Dev { rest: vec![] }));
}

#[test]
fn test_unknown_subcommand() {
    let parsed = Args::try_parse_from(make_args(&["build", "x"])).unwrap();
    assert_eq!(
        parsed.command,
        Some(Command::Unknown(vec!["build".to_string(), "x".to_string()]))
    );
}

#[test]
fn test_rename_args() {
    let parsed = RenameArgs::try_parse_from(["rename-client", "a.swift", "b.swift"]).unwrap();
    assert_eq!(parsed.files, vec![PathBuf::from("a.swift"), PathBuf::from("b.swift")]);

    assert!(RenameArgs::try_parse_from(["rename-client"]).is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let parsed = Args::try_parse_from(make_args(&["new", "foo", "--version"])).unwrap();
    assert!(parsed.version);

    let parsed = Args::try_parse_from(make_args(&["new", "-h"])).unwrap();
    assert!(parsed.help);
    assert_eq!(parsed.command, Some(Command::New { name: None, rest: vec![] }));
}
