//! Runtime configuration for a board.

use serde::Deserialize;
use thiserror::Error;

/// Configuration for task creation on a board.
///
/// The stage policy is fixed and deliberately not configurable.
///
/// # Examples
///
/// ```
/// use stageboard::board::config::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert_eq!(config.first_task_id, 1);
///
/// let lenient = BoardConfig::lenient();
/// assert_eq!(lenient.max_task_name_length, usize::MAX);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Maximum task name length in characters, measured after trimming.
    pub max_task_name_length: usize,
    /// Identifier given to the first task created on the board.
    pub first_task_id: u64,
}

impl BoardConfig {
    /// Default maximum task name length.
    pub const DEFAULT_MAX_TASK_NAME_LENGTH: usize = 256;

    /// Creates a configuration with no task name length cap.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            max_task_name_length: usize::MAX,
            ..Self::default()
        }
    }

    /// Parses a configuration from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] when the input is not valid JSON
    /// for this structure, or [`ConfigError::ZeroNameLength`] when the name
    /// length cap would reject every task.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        if config.max_task_name_length == 0 {
            return Err(ConfigError::ZeroNameLength);
        }
        Ok(config)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_task_name_length: Self::DEFAULT_MAX_TASK_NAME_LENGTH,
            first_task_id: 1,
        }
    }
}

/// Errors returned while loading board configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("malformed board configuration: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The task name length cap is zero.
    #[error("max_task_name_length must be at least 1")]
    ZeroNameLength,
}
