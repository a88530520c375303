use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("At least {required} prize records are required, got {actual}")]
    InsufficientRecordsError { required: usize, actual: usize },

    #[error("Malformed prize record '{record}': {reason}")]
    MalformedRecordError { record: String, reason: String },

    #[error("Sampling invariant violated: {message}")]
    SamplingInvariantViolation { message: String },

    #[error("Failed to write results to '{path}': {source}")]
    OutputWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Internal,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DrawError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DrawError::ConfigError { .. }
            | DrawError::ConfigValidationError { .. }
            | DrawError::InvalidConfigValueError { .. }
            | DrawError::InsufficientRecordsError { .. }
            | DrawError::MalformedRecordError { .. } => ErrorCategory::Configuration,
            DrawError::SamplingInvariantViolation { .. } => ErrorCategory::Internal,
            DrawError::OutputWriteError { .. } => ErrorCategory::Output,
            DrawError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 結果檔寫入失敗不影響已顯示的抽獎結果
            ErrorCategory::Output => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Internal | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,      // 警告，但成功
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,     // 設定錯誤
            ErrorSeverity::Critical => 3, // 內部錯誤
        }
    }

    pub fn is_configuration_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DrawError::InsufficientRecordsError { required, actual } => format!(
                "The prize pool needs at least {} items, but only {} were given",
                required, actual
            ),
            DrawError::MalformedRecordError { record, reason } => {
                format!("Could not read prize record \"{}\": {}", record, reason)
            }
            DrawError::OutputWriteError { path, source } => {
                format!("Could not save the draw results to {}: {}", path, source)
            }
            DrawError::SamplingInvariantViolation { .. } => {
                "The draw failed because of an internal error".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DrawError::InsufficientRecordsError { .. } => {
                "Pass at least three records, either on the command line or in [catalog].items"
            }
            DrawError::MalformedRecordError { .. } => {
                "Write each record as \"<id> <name> <weight>\" with integer id and a positive integer weight"
            }
            DrawError::ConfigError { .. }
            | DrawError::ConfigValidationError { .. }
            | DrawError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command-line options"
            }
            DrawError::OutputWriteError { .. } => {
                "Check that the output directory exists and is writable, or choose another path with --output"
            }
            DrawError::SamplingInvariantViolation { .. } => {
                "Please report this issue together with the prize records that were used"
            }
            DrawError::IoError(_) => "Check that standard output is still open",
        }
    }
}

pub type Result<T> = std::result::Result<T, DrawError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_errors_are_configuration_errors() {
        let err = DrawError::MalformedRecordError {
            record: "1 OnlyTwoTokens".to_string(),
            reason: "expected 3 tokens, found 2".to_string(),
        };
        assert!(err.is_configuration_error());
        assert_eq!(err.severity(), ErrorSeverity::High);

        let err = DrawError::InsufficientRecordsError {
            required: 3,
            actual: 2,
        };
        assert!(err.is_configuration_error());
        assert!(err.user_friendly_message().contains("at least 3"));
    }

    #[test]
    fn test_output_write_error_is_low_severity() {
        let err = DrawError::OutputWriteError {
            path: "results.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.category(), ErrorCategory::Output);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.exit_code(), 0);
        assert!(err.to_string().contains("results.txt"));
    }

    #[test]
    fn test_invariant_violation_is_critical() {
        let err = DrawError::SamplingInvariantViolation {
            message: "no item matched".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_configuration_errors_exit_with_one() {
        let err = DrawError::ConfigError {
            message: "cannot read config file prizes.toml".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
    }
}
