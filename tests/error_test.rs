use std::io;

use skeleton::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::DestinationExistsError {
        destination: "demo".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Directory 'demo' already exists, choose another project name."
    );

    let err = Error::PathTraversalError {
        entry: "../evil.txt".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Illegal file path in archive: '../evil.txt'."
    );

    let err = Error::DownloadStatusError {
        url: "https://example.com/t.zip".to_string(),
        status: 404,
    };
    assert_eq!(
        err.to_string(),
        concat!(
            "Failed to fetch template from 'https://example.com/t.zip': ",
            "server responded with status 404."
        )
    );

    let err = Error::ConfigError("invalid answers".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid answers.");
}
