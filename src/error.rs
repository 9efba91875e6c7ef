use std::path::PathBuf;

/// Why a line typed at the console prompt was not accepted as a move.
///
/// The display strings are what the player sees before being asked again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid input. Please enter a number between 0 and 6.")]
    NotAnInteger(String),

    #[error("Column is full or invalid. Try again.")]
    InvalidColumn(i64),
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
        let err = InputError::NotAnInteger("abc".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid input. Please enter a number between 0 and 6."
        );
        assert_eq!(
            InputError::InvalidColumn(9).to_string(),
            "Column is full or invalid. Try again."
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("display.target_fps must be in 1..=240".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: display.target_fps must be in 1..=240"
        );
    }
}
