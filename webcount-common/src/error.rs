use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum WebCountError {
    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error("HTTP Request Error: {0}")]
    Http(#[from] Arc<reqwest::Error>),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] Arc<serde_json::Error>),

    #[error("HttpError: {0}")]
    HttpError(String),

    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("Parsing Error in {0}: {1}")]
    ParseError(&'static str, String),
}

impl From<std::io::Error> for WebCountError {
    fn from(err: std::io::Error) -> Self {
        WebCountError::Io(Arc::new(err))
    }
}

impl From<reqwest::Error> for WebCountError {
    fn from(err: reqwest::Error) -> Self {
        WebCountError::Http(Arc::new(err))
    }
}

impl From<serde_json::Error> for WebCountError {
    fn from(err: serde_json::Error) -> Self {
        WebCountError::Json(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, WebCountError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn fails() -> Result<()> {
            Err::<(), _>(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert!(matches!(err, WebCountError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn parse_error_names_its_source() {
        let err = WebCountError::ParseError("sum fragment", "unexpected token".to_string());
        assert_eq!(
            err.to_string(),
            "Parsing Error in sum fragment: unexpected token"
        );
    }
}
