use hb_persistence::ConnType;

use crate::dao::{DbError, DbResult};

pub mod models;
pub(crate) mod schema;

embed_migrations!("migrations");

pub fn run_migrations(conn: &ConnType) -> DbResult<()> {
    embedded_migrations::run(&**conn).map_err(|e| DbError::Migration(e.to_string()))
}
