use thiserror::Error;

use hb_model::ValidationError;

use crate::dao::DbError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Not found")]
    NotFound,
    #[error("Invalid payload: {0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Database(#[from] DbError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Turns a missing record into [`Error::NotFound`].
pub trait OrNotFound<T> {
    fn or_not_found(self) -> Result<T>;
}

impl<T, E: Into<Error>> OrNotFound<T> for std::result::Result<Option<T>, E> {
    fn or_not_found(self) -> Result<T> {
        match self {
            Ok(Some(t)) => Ok(t),
            Ok(None) => Err(Error::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}
