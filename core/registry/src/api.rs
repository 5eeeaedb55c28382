use actix_web::error::InternalError;
use actix_web::web::{self, Data};
use actix_web::{HttpRequest, HttpResponse, Scope};
use serde::Deserialize;

use hb_model::ValidationError;
use hb_persistence::executor::DbExecutor;

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::utils::response;

mod activities;
mod catalog;
mod students;

pub trait ExtendableScope {
    fn extend<F>(self, f: F) -> Self
    where
        Self: Sized,
        F: FnOnce(Self) -> Self;
}

impl<T> ExtendableScope for Scope<T> {
    #[inline(always)]
    fn extend<F>(self, f: F) -> Self
    where
        Self: Sized,
        F: FnOnce(Self) -> Self,
    {
        f(self)
    }
}

pub fn web_scope(db: &DbExecutor, config: &ApiConfig) -> Scope {
    Scope::new("")
        .app_data(Data::new(db.clone()))
        .app_data(Data::new(config.clone()))
        .app_data(json_config(config.clone()))
        .extend(students::register_endpoints)
        .extend(catalog::register_endpoints)
        .extend(activities::register_endpoints)
        .default_service(web::to(not_found))
}

/// Bodies that fail to parse go through the same policy as bodies that fail
/// validation.
fn json_config(config: ApiConfig) -> web::JsonConfig {
    web::JsonConfig::default().error_handler(move |err, req| {
        let e = Error::Validation(ValidationError::Malformed(err.to_string()));
        let response = response::error(req, &config, e);
        InternalError::from_response(err, response).into()
    })
}

async fn not_found(req: HttpRequest) -> HttpResponse {
    response::not_found(&req)
}

#[derive(Deserialize)]
pub struct Id {
    pub id: String,
}

/// Listing endpoints answer an empty collection with not-found.
pub(crate) fn non_empty<T>(items: Vec<T>) -> Result<Vec<T>> {
    if items.is_empty() {
        Err(Error::NotFound)
    } else {
        Ok(items)
    }
}
