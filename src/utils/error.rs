use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnitsError {
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Unit '{unit}' did not run to completion: {source}")]
    TaskJoin {
        unit: String,
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("Could not create an execution context: {message}")]
    ContextCreation { message: String },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 設定錯誤，使用者可修正
    High,
    /// 執行環境錯誤
    Critical,
}

impl UnitsError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            UnitsError::TomlError(_)
            | UnitsError::ConfigError { .. }
            | UnitsError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            UnitsError::Output(_)
            | UnitsError::TaskJoin { .. }
            | UnitsError::ContextCreation { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            UnitsError::Output(_) => "Check that stdout is writable (e.g. not a closed pipe)",
            UnitsError::TaskJoin { .. } => "A unit panicked or the runtime shut down; rerun with --verbose",
            UnitsError::ContextCreation { .. } => "Launch units from inside a tokio runtime",
            UnitsError::TomlError(_) => "Make sure the config file is valid TOML with a [launch] table",
            UnitsError::ConfigError { .. } | UnitsError::InvalidConfigValueError { .. } => {
                "Fix the reported setting in the config file or on the command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, UnitsError>;
