//! SQLite connection pooling and transaction helpers shared by the hourbook services.
//!
//! Every DAO borrows the pool of a [`executor::DbExecutor`] and runs its diesel
//! queries on a blocking thread through [`executor::do_with_transaction`] or
//! [`executor::readonly_transaction`].

#[cfg_attr(test, macro_use)]
extern crate diesel;

pub mod executor;

pub use executor::{AsDao, ConnType, DbExecutor, PoolType};
