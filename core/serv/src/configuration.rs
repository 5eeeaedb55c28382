use anyhow::{Context, Result};
use std::convert::TryFrom;
use url::Url;

use hb_persistence::executor::DbExecutor;
use hb_registry::Registry;

use crate::CliArgs;

pub struct CliCtx {
    database_url: String,
}

impl TryFrom<&CliArgs> for CliCtx {
    type Error = anyhow::Error;

    fn try_from(args: &CliArgs) -> Result<Self, Self::Error> {
        let database_url = args.database_url.trim().to_string();
        if database_url.is_empty() {
            anyhow::bail!("database url can't be empty");
        }
        Ok(CliCtx { database_url })
    }
}

impl CliCtx {
    /// Opens the pool and brings the schema up to date.
    pub fn open_db(&self) -> Result<DbExecutor> {
        let db = DbExecutor::new(self.database_url.clone())
            .context(format!("Failed to open database {}", self.database_url))?;
        Registry::migrate(&db).context("Failed to apply migrations")?;
        Ok(db)
    }
}

pub fn api_addr(url: &Url) -> Result<(String, u16)> {
    let host = url
        .host_str()
        .ok_or_else(|| anyhow::anyhow!("invalid api url: {}, no host part", url))?
        .to_string();
    let port = url
        .port_or_known_default()
        .ok_or_else(|| anyhow::anyhow!("invalid api url: {}, no port", url))?;
    Ok((host, port))
}
