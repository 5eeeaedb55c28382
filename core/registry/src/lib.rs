//! Students, companies, teachers and the activities students log against
//! their required hours, served over a small REST API.

#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_migrations;

pub mod api;
pub mod config;
pub mod dao;
pub mod db;
pub mod error;
pub mod hours;
pub mod import;
pub mod service;
pub mod utils;

pub use config::{ApiConfig, InvalidPayloadPolicy, MissingActivityPolicy};
pub use import::Fixtures;
pub use service::Registry;
