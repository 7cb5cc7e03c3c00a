//! Error types for the JSON|YAML conversion pipeline

/// Core error type for a single conversion invocation.
///
/// Every variant is unrecoverable at the pipeline level: the invocation
/// terminates with a user-facing message and a non-zero exit status. No
/// retries, no partial output.
#[derive(Debug, thiserror::Error)]
pub enum JyError {
    #[error("{source_desc} is unusable: {cause}")]
    InputUnreadable {
        source_desc: String,
        #[source]
        cause: std::io::Error,
    },

    #[error("{source_desc} is neither JSON nor YAML")]
    UnknownFormat { source_desc: String },

    #[error("conversion failed: {message}")]
    ConversionFailure { message: String },

    #[error("failed writing output: {cause}")]
    Render {
        #[source]
        cause: std::io::Error,
    },
}

impl JyError {
    pub fn input_unreadable(source_desc: impl Into<String>, cause: std::io::Error) -> Self {
        Self::InputUnreadable {
            source_desc: source_desc.into(),
            cause,
        }
    }

    pub fn unknown_format(source_desc: impl Into<String>) -> Self {
        Self::UnknownFormat {
            source_desc: source_desc.into(),
        }
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::ConversionFailure {
            message: message.into(),
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::InputUnreadable { source_desc, cause } => {
                format!("{} is unusable: {}", source_desc, cause)
            }
            Self::UnknownFormat { source_desc } => {
                format!("{} is neither JSON nor YAML", source_desc)
            }
            Self::ConversionFailure { message } => {
                format!("conversion failed: {}", message)
            }
            Self::Render { cause } => {
                format!("failed writing output: {}", cause)
            }
        }
    }
}

/// Result type for pipeline operations
pub type JyResult<T> = Result<T, JyError>;
