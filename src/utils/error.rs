use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Inventory source not found: {path}")]
    SourceNotFound { path: String },

    #[error("Malformed line {line} ({content:?}): {reason}")]
    MalformedLine {
        line: u64,
        content: String,
        reason: String,
    },

    #[error("Invalid input for '{field}' ({value:?}): {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No shoe found with code '{code}'")]
    NotFound { code: String },

    #[error("Inventory is empty")]
    EmptyInventory,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to replace inventory file: {0}")]
    PersistError(#[from] tempfile::PersistError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl InventoryError {
    pub fn invalid_input(field: &str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Errors the menu reports and then carries on from.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::SourceNotFound { .. }
                | Self::MalformedLine { .. }
                | Self::InvalidInput { .. }
                | Self::NotFound { .. }
                | Self::EmptyInventory
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::SourceNotFound { path } => format!("Error: {} file not found.", path),
            Self::MalformedLine { content, reason, .. } => {
                format!("Error processing line: {}. Error: {}", content, reason)
            }
            Self::InvalidInput { field, reason, .. } => {
                format!("Invalid input. {} {}.", capitalize(field), reason)
            }
            Self::NotFound { .. } => "No shoe found with that code.".to_string(),
            Self::EmptyInventory => "No shoes in inventory.".to_string(),
            other => format!("Unexpected failure: {}", other),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
