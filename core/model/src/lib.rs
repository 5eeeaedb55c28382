pub mod activity;
pub mod catalog;
pub mod error;
pub mod student;

pub use error::{ErrorMessage, Message, ValidationError};
