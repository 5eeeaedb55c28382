use actix_web::Scope;

use hb_persistence::executor::DbExecutor;

use crate::api;
use crate::config::ApiConfig;
use crate::dao::{FixtureDao, ImportSummary};
use crate::db::run_migrations;
use crate::import::Fixtures;

pub struct Registry;

impl Registry {
    pub fn migrate(db: &DbExecutor) -> anyhow::Result<()> {
        log::debug!("Applying registry migrations");
        db.apply_migration(|conn| Ok(run_migrations(conn)?))
    }

    pub fn rest(db: &DbExecutor, config: &ApiConfig) -> Scope {
        api::web_scope(db, config)
    }

    pub async fn import(db: &DbExecutor, fixtures: Fixtures) -> anyhow::Result<ImportSummary> {
        let dao: FixtureDao = db.as_dao();
        let summary = dao.import(fixtures.into_rows()).await?;
        log::info!(
            "Imported {} companies, {} teachers and {} students",
            summary.companies,
            summary.teachers,
            summary.students
        );
        Ok(summary)
    }
}
