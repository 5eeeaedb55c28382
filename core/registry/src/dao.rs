mod activity;
mod catalog;
mod fixtures;
mod student;

pub use self::activity::ActivityDao;
pub use self::catalog::{CompanyDao, TeacherDao};
pub use self::fixtures::{FixtureDao, FixtureRows, ImportSummary};
pub use self::student::{StudentDao, StudentRecord};

use diesel::dsl::sql;
use diesel::expression::SqlLiteral;
use diesel::sql_types::BigInt;

#[derive(thiserror::Error, Debug)]
pub enum DbError {
    #[error("Database connection error: {0}")]
    Connection(#[from] r2d2::Error),
    #[error("Database query error: {0}")]
    Query(#[from] diesel::result::Error),
    #[error("Runtime error: {0}")]
    Runtime(#[from] tokio::task::JoinError),
    #[error("Migration error: {0}")]
    Migration(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// Insertion order of a table.
pub(crate) fn natural_order() -> SqlLiteral<BigInt> {
    sql::<BigInt>("rowid")
}
