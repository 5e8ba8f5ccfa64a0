use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeadError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFoundError { path: String },

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Storage,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LeadError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LeadError::IoError(_) => ErrorCategory::Storage,
            LeadError::CsvError(_) => ErrorCategory::Data,
            LeadError::ConfigNotFoundError { .. }
            | LeadError::ConfigParseError { .. }
            | LeadError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error. Configuration problems exit with 1,
    /// filesystem problems with 3.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LeadError::IoError(_) => {
                "Check that the export directory is writable and the disk is not full".to_string()
            }
            LeadError::CsvError(_) => {
                "Make sure the CSV file was produced by lead-finder and has not been edited".to_string()
            }
            LeadError::ConfigNotFoundError { .. } => {
                "Pass an existing file to --config, or omit the flag to use built-in defaults"
                    .to_string()
            }
            LeadError::ConfigParseError { .. } => {
                "Fix the TOML syntax in the configuration file".to_string()
            }
            LeadError::InvalidConfigValueError { field, .. } => {
                format!("Correct the '{}' setting in the configuration file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LeadError::IoError(e) => format!("Could not write lead data: {}", e),
            LeadError::CsvError(e) => format!("Could not process the lead CSV: {}", e),
            LeadError::ConfigNotFoundError { path } => {
                format!("ERROR: configuration file '{}' not found", path)
            }
            LeadError::ConfigParseError { message } => {
                format!("ERROR: configuration file is not valid: {}", message)
            }
            LeadError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("ERROR: '{}' = '{}' is invalid: {}", field, value, reason),
        }
    }
}

pub type Result<T> = std::result::Result<T, LeadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_exit_with_one() {
        let err = LeadError::ConfigNotFoundError {
            path: "missing.toml".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("missing.toml"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = LeadError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_invalid_value_suggestion_names_field() {
        let err = LeadError::InvalidConfigValueError {
            field: "geography.radius_miles".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert!(err.recovery_suggestion().contains("geography.radius_miles"));
    }
}
