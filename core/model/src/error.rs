use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

pub const NOT_FOUND_PREFIX: &str = "Recurso no encontrado: ";
pub const INVALID_PREFIX: &str = "Datos no validos: ";
pub const INTERNAL_PREFIX: &str = "Error interno: ";

/// Error envelope returned by every failing endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
    pub status: u16,
}

impl ErrorMessage {
    pub fn not_found(url: impl Display) -> Self {
        ErrorMessage {
            message: format!("{}{}", NOT_FOUND_PREFIX, url),
            status: 404,
        }
    }

    pub fn invalid(reason: impl Display) -> Self {
        ErrorMessage {
            message: format!("{}{}", INVALID_PREFIX, reason),
            status: 400,
        }
    }

    pub fn internal(reason: impl Display) -> Self {
        ErrorMessage {
            message: format!("{}{}", INTERNAL_PREFIX, reason),
            status: 500,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Message {
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("missing or empty field '{0}'")]
    Missing(&'static str),
    #[error("field 'time' is not a number: {0}")]
    NotNumeric(String),
    #[error("malformed body: {0}")]
    Malformed(String),
}
