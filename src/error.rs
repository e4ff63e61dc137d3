use std::path::PathBuf;

/// A rejected line of player input. Both kinds are recovered from by
/// re-prompting the same player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid character")]
    InvalidChar,

    #[error("Invalid column")]
    InvalidColumn,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_display() {
        assert_eq!(InputError::InvalidChar.to_string(), "Invalid character");
        assert_eq!(InputError::InvalidColumn.to_string(), "Invalid column");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("player_one.name must not be blank".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: player_one.name must not be blank"
        );
    }
}
