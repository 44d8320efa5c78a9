use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Template rendering failed: {0}")]
    TemplateError(#[from] askama::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate {kind} id '{id}'")]
    DuplicateEntryError { kind: &'static str, id: String },

    #[error("Unknown {kind} '{id}'")]
    UnknownEntryError { kind: &'static str, id: String },
}

impl PortfolioError {
    /// Short message suitable for a terminal user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::IoError(e) => format!("Could not read the knowledge file: {}", e),
            PortfolioError::SerializationError(_) => "Could not format the response".to_string(),
            PortfolioError::TemplateError(_) => "Could not render the response".to_string(),
            PortfolioError::ConfigValidationError { field, .. }
            | PortfolioError::InvalidConfigValueError { field, .. } => {
                format!("The knowledge base or options are invalid ({})", field)
            }
            PortfolioError::DuplicateEntryError { kind, id } => {
                format!("The knowledge base lists the {} '{}' twice", kind, id)
            }
            PortfolioError::UnknownEntryError { kind, id } => {
                format!("There is no {} with id '{}'", kind, id)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PortfolioError::IoError(_) => "Check that the --knowledge path exists and is readable",
            PortfolioError::SerializationError(_) | PortfolioError::TemplateError(_) => {
                "Try --format text"
            }
            PortfolioError::ConfigValidationError { .. }
            | PortfolioError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the knowledge TOML or command-line options"
            }
            PortfolioError::DuplicateEntryError { .. } => "Give every entry a unique id",
            PortfolioError::UnknownEntryError { .. } => {
                "Run `projects` to list the available project ids"
            }
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            PortfolioError::UnknownEntryError { .. } => 2,
            PortfolioError::IoError(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
