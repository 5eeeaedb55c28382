use actix_web::web::{get, Data};
use actix_web::{HttpRequest, HttpResponse, Scope};

use hb_model::catalog::{Company, Teacher};
use hb_persistence::executor::DbExecutor;

use crate::api::non_empty;
use crate::config::ApiConfig;
use crate::dao::{CompanyDao, TeacherDao};
use crate::error::Result;
use crate::utils::response;

pub fn register_endpoints(scope: Scope) -> Scope {
    scope
        .route("/company", get().to(get_companies))
        .route("/teacher", get().to(get_teachers))
}

async fn get_companies(
    db: Data<DbExecutor>,
    config: Data<ApiConfig>,
    req: HttpRequest,
) -> HttpResponse {
    response::json(&req, &config, list_companies(&db).await)
}

async fn get_teachers(
    db: Data<DbExecutor>,
    config: Data<ApiConfig>,
    req: HttpRequest,
) -> HttpResponse {
    response::json(&req, &config, list_teachers(&db).await)
}

async fn list_companies(db: &DbExecutor) -> Result<Vec<Company>> {
    let dao: CompanyDao = db.as_dao();
    non_empty(dao.list().await?)
}

async fn list_teachers(db: &DbExecutor) -> Result<Vec<Teacher>> {
    let dao: TeacherDao = db.as_dao();
    non_empty(dao.list().await?)
}
