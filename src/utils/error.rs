use thiserror::Error;

#[derive(Error, Debug)]
pub enum SantaError {
    #[error("At least 2 participants are required for Secret Santa (got {count})")]
    InsufficientParticipants { count: usize },

    #[error("Duplicate email(s) found: {}", .identities.join(", "))]
    DuplicateIdentity { identities: Vec<String> },

    #[error(
        "Could not generate valid assignments after {attempts} attempts. \
         This may happen if constraints are too restrictive."
    )]
    MatchingFailed { attempts: usize },

    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Matching,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SantaError {
    pub fn malformed(message: impl Into<String>) -> Self {
        SantaError::MalformedInput {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SantaError::InsufficientParticipants { .. }
            | SantaError::DuplicateIdentity { .. }
            | SantaError::MalformedInput { .. }
            | SantaError::CsvError(_) => ErrorCategory::Input,
            SantaError::MatchingFailed { .. } => ErrorCategory::Matching,
            SantaError::ConfigValidationError { .. }
            | SantaError::InvalidConfigValueError { .. }
            | SantaError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SantaError::IoError(_) | SantaError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 隨機搜尋失敗，重新執行有機會成功
            ErrorCategory::Matching => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 依錯誤種類給出處理建議
    pub fn recovery_suggestion(&self) -> String {
        match self {
            SantaError::InsufficientParticipants { .. } => {
                "Add at least two participants to the input file".to_string()
            }
            SantaError::DuplicateIdentity { identities } => format!(
                "Remove or fix the repeated email address(es): {}",
                identities.join(", ")
            ),
            SantaError::MatchingFailed { .. } => {
                "Run again, raise --max-attempts, or drop the previous assignments file if the group is very small"
                    .to_string()
            }
            SantaError::MalformedInput { .. } | SantaError::CsvError(_) => {
                "Check that the input files have the expected columns and valid values".to_string()
            }
            SantaError::IoError(_) => {
                "Verify the file paths exist and are readable/writable".to_string()
            }
            SantaError::SerializationError(_) => {
                "Check that JSON input files are well formed".to_string()
            }
            SantaError::ConfigValidationError { field, .. }
            | SantaError::InvalidConfigValueError { field, .. }
            | SantaError::MissingConfigError { field } => {
                format!("Review the '{}' setting", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Input rejected: {}", self),
            ErrorCategory::Matching => format!("Matching failed: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    /// 依嚴重程度決定程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SantaError>;
