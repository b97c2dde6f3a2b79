use std::path::PathBuf;

use crate::types::ViewId;

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
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("keybind error: {0}")]
    KeybindError(String),

}

/// Failures of view lifecycle and compositing operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewError {
    #[error("view not found: {0}")]
    NotFound(ViewId),

    #[error("view already exists: {0}")]
    AlreadyExists(ViewId),

    #[error("invalid view id: {0:?}")]
    InvalidId(String),

    #[error("content engine error: {0}")]
    Engine(String),

    #[error("script error: {0}")]
    Script(String),
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

        let err = ConfigError::ValidationError("duplicate app id 'mail'".into());
        assert_eq!(
            err.to_string(),
            "config validation error: duplicate app id 'mail'"
        );
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::KeybindError("empty keybind string".into());
        assert_eq!(err.to_string(), "keybind error: empty keybind string");

        let err = PlatformError::PathError("could not determine data directory".into());
        assert_eq!(err.to_string(), "path error: could not determine data directory");
    }

    #[test]
    fn view_error_display() {
        let err = ViewError::NotFound(ViewId::new("Mail"));
        assert_eq!(err.to_string(), "view not found: mail");

        let err = ViewError::AlreadyExists(ViewId::new("Chat"));
        assert_eq!(err.to_string(), "view already exists: chat");

        let err = ViewError::InvalidId("  ".into());
        assert_eq!(err.to_string(), "invalid view id: \"  \"");
    }
}
