use std::fs;

use tempfile::TempDir;
use xtool_demo::rename::Renamer;

const GENERATED: &str = "public struct Client: APIProtocol {\n    let factory = ClientFactory()\n}\n";

#[test]
fn test_rewrite_file_renames_standalone_client() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Client.swift");
    fs::write(&path, GENERATED).unwrap();

    let renamer = Renamer::client().unwrap();
    assert!(renamer.rewrite_file(&path).unwrap());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "public struct DeveloperAPIClient: APIProtocol {\n    let factory = ClientFactory()\n}\n"
    );
}

#[test]
fn test_rewrite_file_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Client.swift");
    fs::write(&path, GENERATED).unwrap();

    let renamer = Renamer::client().unwrap();
    assert!(renamer.rewrite_file(&path).unwrap());
    let modified = fs::metadata(&path).unwrap().modified().unwrap();
    let content = fs::read_to_string(&path).unwrap();

    assert!(!renamer.rewrite_file(&path).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), modified);
}

#[test]
fn test_rewrite_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let renamer = Renamer::client().unwrap();
    assert!(renamer.rewrite_file(temp_dir.path().join("missing.swift")).is_err());
}

#[test]
fn test_rewrite_file_converts_crlf_to_lf() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Client.swift");
    fs::write(&path, "struct Client {\r\n}\r\n").unwrap();

    let renamer = Renamer::client().unwrap();
    assert!(renamer.rewrite_file(&path).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), "struct DeveloperAPIClient {\n}\n");
}

#[test]
fn test_crlf_file_without_client_is_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Other.swift");
    fs::write(&path, "let f = ClientFactory()\r\n").unwrap();

    let renamer = Renamer::client().unwrap();
    assert!(!renamer.rewrite_file(&path).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), "let f = ClientFactory()\r\n");
}
