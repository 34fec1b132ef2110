use srgb_transfer::ParseColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid color input: {0}")]
    Parse(#[from] ParseColorError),

    #[error("Unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_parse() {
        let error = AppError::from(ParseColorError::InvalidLength { found: 2 });
        assert_eq!(
            error.to_string(),
            "Invalid color input: invalid hex color length (expected 6 characters, got 2)"
        );
    }

    #[test]
    fn test_app_error_unexpected_eof() {
        let error = AppError::UnexpectedEof("format");
        assert_eq!(
            error.to_string(),
            "Unexpected end of input while reading format"
        );
    }

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let app_error: AppError = io_error.into();
        match app_error {
            AppError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }
}
