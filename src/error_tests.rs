//! Tests for TickscoutError type

use super::*;

#[test]
fn test_invalid_config_error_display() {
    let error = TickscoutError::InvalidConfig("expected table".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Invalid config"));
    assert!(msg.contains("expected table"));
}

#[test]
fn test_invalid_api_url_error_display() {
    let error = TickscoutError::InvalidApiUrl("not-a-url".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Invalid API base URL"));
    assert!(msg.contains("not-a-url"));
}

#[test]
fn test_io_error_display() {
    let error = TickscoutError::Io("file not found".to_string());
    let msg = error.to_string();
    assert!(msg.contains("IO error"));
    assert!(msg.contains("file not found"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = TickscoutError::from(io_err);
    assert!(matches!(err, TickscoutError::Io(_)));
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_error_equality() {
    let err1 = TickscoutError::Io("test".to_string());
    let err2 = TickscoutError::Io("test".to_string());
    let err3 = TickscoutError::Io("different".to_string());

    assert_eq!(err1, err2);
    assert_ne!(err1, err3);
}

#[test]
fn test_all_error_variants_are_cloneable() {
    let errors: Vec<TickscoutError> = vec![
        TickscoutError::NoConfigDir,
        TickscoutError::InvalidConfig("test".to_string()),
        TickscoutError::InvalidApiUrl("test".to_string()),
        TickscoutError::Io("test".to_string()),
    ];

    for error in errors {
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }
}
