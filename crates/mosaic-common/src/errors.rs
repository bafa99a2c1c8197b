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
pub enum MosaicError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("layout error: {0}")]
    Layout(String),

    #[error("serialization error: {0}")]
    Serialization(String),
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

        let err = ConfigError::ValidationError("gap = 90 is out of range [0, 20]".into());
        assert_eq!(
            err.to_string(),
            "config validation error: gap = 90 is out of range [0, 20]"
        );
    }

    #[test]
    fn mosaic_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: MosaicError = config_err.into();
        assert!(matches!(err, MosaicError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn mosaic_error_other_variants() {
        let err = MosaicError::Layout("path [first] not found".into());
        assert_eq!(err.to_string(), "layout error: path [first] not found");

        let err = MosaicError::Serialization("expected a split".into());
        assert_eq!(err.to_string(), "serialization error: expected a split");
    }
}
