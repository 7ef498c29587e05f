use crate::model::MealId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MealError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Meal not found: {0}")]
    MealNotFound(MealId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl MealError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        MealError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MealError>;
