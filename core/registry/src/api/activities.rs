use actix_web::web::{delete, get, post, put, Data, Json, Path};
use actix_web::{HttpRequest, HttpResponse, Scope};

use hb_model::activity::{deleted_message, Activity, NewActivity};
use hb_model::{Message, ValidationError};
use hb_persistence::executor::DbExecutor;

use crate::api::Id;
use crate::config::{ApiConfig, MissingActivityPolicy};
use crate::dao::{ActivityDao, StudentDao};
use crate::error::{Error, OrNotFound, Result};
use crate::utils::response;

pub fn register_endpoints(scope: Scope) -> Scope {
    scope
        .route("/activity/{id}", get().to(get_activity))
        .route("/activity/{id}", post().to(create_activity))
        .route("/activity/{id}", put().to(update_activity))
        .route("/activity/{id}", delete().to(delete_activity))
}

async fn get_activity(
    db: Data<DbExecutor>,
    config: Data<ApiConfig>,
    path: Path<Id>,
    req: HttpRequest,
) -> HttpResponse {
    let activity_id = path.into_inner().id;
    response::json(&req, &config, find_activity(&db, activity_id).await)
}

/// The path id is the student the new activity belongs to. An unknown
/// student is reported before anything about the body.
async fn create_activity(
    db: Data<DbExecutor>,
    config: Data<ApiConfig>,
    path: Path<Id>,
    body: std::result::Result<Json<NewActivity>, actix_web::Error>,
    req: HttpRequest,
) -> HttpResponse {
    let student_id = path.into_inner().id;
    let body = body
        .map(Json::into_inner)
        .map_err(|e| ValidationError::Malformed(e.to_string()));
    let result = create_for_student(&db, student_id, body).await;
    response::json(&req, &config, result)
}

async fn update_activity(
    db: Data<DbExecutor>,
    config: Data<ApiConfig>,
    path: Path<Id>,
    body: Json<NewActivity>,
    req: HttpRequest,
) -> HttpResponse {
    let activity_id = path.into_inner().id;
    let result = overwrite_activity(&db, &config, activity_id, body.into_inner()).await;
    response::json(&req, &config, result)
}

async fn delete_activity(
    db: Data<DbExecutor>,
    config: Data<ApiConfig>,
    path: Path<Id>,
    req: HttpRequest,
) -> HttpResponse {
    let activity_id = path.into_inner().id;
    response::json(&req, &config, remove_activity(&db, &config, activity_id).await)
}

async fn find_activity(db: &DbExecutor, activity_id: String) -> Result<Vec<Activity>> {
    let dao: ActivityDao = db.as_dao();
    let activity = dao.get(activity_id).await.or_not_found()?;
    Ok(vec![activity])
}

async fn create_for_student(
    db: &DbExecutor,
    student_id: String,
    body: std::result::Result<NewActivity, ValidationError>,
) -> Result<Activity> {
    let students: StudentDao = db.as_dao();
    if !students.exists(student_id.clone()).await? {
        return Err(Error::NotFound);
    }

    let fields = body?.validate()?;
    let dao: ActivityDao = db.as_dao();
    dao.create_for_student(student_id, fields)
        .await
        .or_not_found()
}

async fn overwrite_activity(
    db: &DbExecutor,
    config: &ApiConfig,
    activity_id: String,
    body: NewActivity,
) -> Result<Activity> {
    let fields = body.validate()?;
    let dao: ActivityDao = db.as_dao();
    let updated = dao.update(activity_id.clone(), fields.clone()).await?;

    if !updated {
        log::debug!("Update of unknown activity {}", activity_id);
        if config.missing_activity == MissingActivityPolicy::NotFound {
            return Err(Error::NotFound);
        }
    }
    Ok(fields.into_activity(activity_id))
}

async fn remove_activity(
    db: &DbExecutor,
    config: &ApiConfig,
    activity_id: String,
) -> Result<Message> {
    let dao: ActivityDao = db.as_dao();
    let deleted = dao.delete(activity_id.clone()).await?;

    if !deleted {
        log::debug!("Delete of unknown activity {}", activity_id);
        if config.missing_activity == MissingActivityPolicy::NotFound {
            return Err(Error::NotFound);
        }
    }
    Ok(deleted_message(&activity_id))
}
