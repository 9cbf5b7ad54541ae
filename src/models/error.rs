use std::fmt;

#[derive(Debug)]
pub enum Error {
    ConfigError(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigError(msg) => write!(f, "Config Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes_variant() {
        let err = Error::ConfigError("word delimiter set must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Config Error: word delimiter set must not be empty"
        );
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_io_error_is_exposed_as_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let err: Error = io_err.into();

        assert!(matches!(err, Error::IoError(_)));
        assert_eq!(err.to_string(), "IO Error: stdin closed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
