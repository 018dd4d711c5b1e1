use crate::errors::{ErrorCode, ErrorContext};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Serialize, Clone)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Erreur de validation (400) : le détail du champ part dans `details`
    pub fn validation(context: ErrorContext) -> Self {
        let message = format!("Validation failed for {}", context.field);

        match serde_json::to_value(&context) {
            Ok(details) => Self::new(ErrorCode::ValidationFailed, message).with_details(details),
            Err(err) => {
                tracing::error!("Failed to serialize error context: {:?}", err);
                Self::new(ErrorCode::ValidationFailed, message)
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
