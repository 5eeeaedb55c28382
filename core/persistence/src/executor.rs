use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::{Connection, SqliteConnection};
use std::path::Path;

pub type InnerConnType = SqliteConnection;
pub type PoolType = Pool<ConnectionManager<InnerConnType>>;
pub type ConnType = PooledConnection<ConnectionManager<InnerConnType>>;

const CONNECTION_INIT: &str = "PRAGMA busy_timeout = 15000; \
    PRAGMA synchronous = NORMAL; \
    PRAGMA journal_mode = WAL; \
    PRAGMA foreign_keys = ON;";

#[derive(Debug)]
struct ConnectionInit;

impl CustomizeConnection<InnerConnType, diesel::r2d2::Error> for ConnectionInit {
    fn on_acquire(&self, conn: &mut InnerConnType) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(CONNECTION_INIT)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Constructs a DAO bound to the connection pool.
pub trait AsDao<'a> {
    fn as_dao(pool: &'a PoolType) -> Self;
}

#[derive(Clone)]
pub struct DbExecutor {
    pub pool: PoolType,
}

impl DbExecutor {
    pub fn new<S: Into<String>>(database_url: S) -> Result<Self, r2d2::Error> {
        let database_url = database_url.into();
        log::info!("Using database at: {}", database_url);

        let manager = ConnectionManager::new(database_url);
        let pool = Pool::builder()
            .connection_customizer(Box::new(ConnectionInit))
            .build(manager)?;
        Ok(DbExecutor { pool })
    }

    pub fn from_data_dir(data_dir: &Path, name: &str) -> Result<Self, r2d2::Error> {
        let db = data_dir.join(name).with_extension("db");
        Self::new(db.to_string_lossy())
    }

    pub fn as_dao<'a, T: AsDao<'a>>(&'a self) -> T {
        AsDao::as_dao(&self.pool)
    }

    pub fn apply_migration<Migration>(&self, migration: Migration) -> anyhow::Result<()>
    where
        Migration: FnOnce(&ConnType) -> anyhow::Result<()>,
    {
        let conn = self.pool.get()?;
        migration(&conn)
    }
}

/// Runs `f` inside an immediate (write-locking) transaction on a blocking thread.
/// Any `Err` returned by `f` rolls the whole transaction back.
pub async fn do_with_transaction<R, Error, F>(
    pool: &PoolType,
    label: &'static str,
    f: F,
) -> Result<R, Error>
where
    R: Send + 'static,
    Error: Send
        + 'static
        + From<tokio::task::JoinError>
        + From<r2d2::Error>
        + From<diesel::result::Error>,
    F: FnOnce(&ConnType) -> Result<R, Error> + Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let conn = pool.get()?;
        log::trace!("{}: write transaction", label);
        conn.immediate_transaction(|| f(&conn))
    })
    .await?
}

/// Runs `f` inside a deferred transaction, for queries that only read.
pub async fn readonly_transaction<R, Error, F>(
    pool: &PoolType,
    label: &'static str,
    f: F,
) -> Result<R, Error>
where
    R: Send + 'static,
    Error: Send
        + 'static
        + From<tokio::task::JoinError>
        + From<r2d2::Error>
        + From<diesel::result::Error>,
    F: FnOnce(&ConnType) -> Result<R, Error> + Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let conn = pool.get()?;
        log::trace!("{}: read transaction", label);
        conn.transaction(|| f(&conn))
    })
    .await?
}
