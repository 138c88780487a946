use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum QabotError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("session not found: {0}")]
    SessionNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("memory.max_turns = 900".into());
        assert_eq!(
            err.to_string(),
            "config validation error: memory.max_turns = 900"
        );
    }

    #[test]
    fn qabot_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin closed");
        let err: QabotError = io_err.into();
        assert!(matches!(err, QabotError::Io(_)));
        assert!(err.to_string().contains("stdin closed"));
    }

    #[test]
    fn session_not_found_names_the_id() {
        let err = QabotError::SessionNotFound("abc".into());
        assert_eq!(err.to_string(), "session not found: abc");
    }
}
