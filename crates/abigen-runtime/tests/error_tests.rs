//! Integration tests for error handling in abigen-runtime

use abigen_runtime::AbigenError;
use std::path::PathBuf;

#[test]
fn test_parse_failure_message_names_path() {
    let error = AbigenError::parse_failure("out/Token.json", "expected value at line 1");

    let error_msg = error.to_string();
    assert!(error_msg.contains("Parse failure"));
    assert!(error_msg.contains("out/Token.json"));
    assert!(error_msg.contains("expected value at line 1"));
}

#[test]
fn test_unidentifiable_fragment_message() {
    let error = AbigenError::unidentifiable("constructor");

    let error_msg = error.to_string();
    assert!(error_msg.contains("unnamed constructor"));
}

#[test]
fn test_duplicate_identifier_names_both_fragments() {
    let error = AbigenError::duplicate_identifier(
        "transfer_address_uint256",
        "transfer(address,uint256)",
        "transfer(address,uint256)",
    );

    let error_msg = error.to_string();
    assert!(error_msg.contains("transfer_address_uint256"));
    assert_eq!(error_msg.matches("transfer(address,uint256)").count(), 2);
}

#[test]
fn test_write_failure_keeps_source() {
    use std::error::Error;

    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    let error = AbigenError::write_failure(PathBuf::from("abis/Token.ts"), io_error);

    assert!(error.to_string().contains("abis/Token.ts"));
    assert!(error.source().is_some());
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: AbigenError = io_error.into();

    let error_msg = error.to_string();
    assert!(error_msg.contains("I/O error"));
    assert!(error_msg.contains("file not found"));
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AbigenError = json_error.into();

    assert!(error.to_string().contains("JSON error"));
}

#[test]
fn test_error_debug_format() {
    let error = AbigenError::unidentifiable("receive");
    let debug_output = format!("{:?}", error);

    assert!(debug_output.contains("UnidentifiableFragment"));
}
