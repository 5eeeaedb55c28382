use actix_web::{middleware, App, HttpServer};
use anyhow::{Context, Result};
use env_logger::Env;
use std::{convert::TryInto, path::PathBuf};
use structopt::*;
use url::Url;

use hb_registry::{ApiConfig, Fixtures, Registry};

pub(crate) mod configuration;
use configuration::CliCtx;

#[derive(StructOpt, Debug)]
#[structopt(global_setting = clap::AppSettings::ColoredHelp)]
#[structopt(about = clap::crate_description!())]
#[structopt(setting = clap::AppSettings::DeriveDisplayOrder)]
struct CliArgs {
    /// SQLite database file
    #[structopt(long, env = "DATABASE_URL", default_value = "hourbook.db")]
    #[structopt(set = clap::ArgSettings::Global)]
    database_url: String,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt, Debug)]
pub enum Command {
    /// Core service usage
    #[structopt(setting = clap::AppSettings::DeriveDisplayOrder)]
    Service(Service),

    /// Loads companies, teachers and students from a JSON fixture file
    Import {
        #[structopt(parse(from_os_str))]
        path: PathBuf,
    },
}

impl Command {
    async fn run_command(&self, ctx: &CliCtx) -> Result<()> {
        match self {
            Command::Service(service) => service.run_command(ctx).await,
            Command::Import { path } => {
                let db = ctx.open_db()?;
                let fixtures = Fixtures::from_path(path)?;
                let summary = Registry::import(&db, fixtures)
                    .await
                    .context(format!("Failed to import {}", path.display()))?;
                println!(
                    "Imported {} companies, {} teachers, {} students",
                    summary.companies, summary.teachers, summary.students
                );
                Ok(())
            }
        }
    }
}

#[derive(StructOpt, Debug)]
pub enum Service {
    /// Runs server in foreground
    Run(ServiceRunOpts),
}

#[derive(StructOpt, Debug)]
pub struct ServiceRunOpts {
    /// Service address
    #[structopt(long, env = "HOURBOOK_API_URL", default_value = "http://127.0.0.1:5000")]
    api_url: Url,

    /// Number of HTTP workers [default: number of CPUs]
    #[structopt(long, env = "HOURBOOK_WORKERS")]
    workers: Option<usize>,

    #[structopt(flatten)]
    api: ApiConfig,
}

impl Service {
    async fn run_command(&self, ctx: &CliCtx) -> Result<()> {
        match self {
            Self::Run(opts) => {
                let db = ctx.open_db()?;
                let addr = configuration::api_addr(&opts.api_url)?;
                let config = opts.api.clone();
                log::info!(
                    "Starting {} service at {} (missing activity: {}, invalid payload: {})",
                    clap::crate_name!(),
                    opts.api_url,
                    config.missing_activity,
                    config.invalid_payload
                );

                let mut server = HttpServer::new(move || {
                    App::new()
                        .wrap(middleware::Logger::default())
                        .service(Registry::rest(&db, &config))
                });
                if let Some(workers) = opts.workers {
                    server = server.workers(workers);
                }

                server
                    .bind(addr.clone())
                    .context(format!("Failed to bind {:?}", addr))?
                    .run()
                    .await?;

                log::info!("{} service successfully finished!", clap::crate_name!());
                Ok(())
            }
        }
    }
}

impl CliArgs {
    async fn run_command(&self) -> Result<()> {
        let ctx: CliCtx = self.try_into()?;
        self.command.run_command(&ctx).await
    }
}

#[actix_rt::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = CliArgs::from_args();

    env_logger::Builder::from_env(Env::default().default_filter_or("info,actix_web=info"))
        .format_timestamp_millis()
        .init();

    args.run_command().await
}
