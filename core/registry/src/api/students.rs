use actix_web::web::{get, Data, Path};
use actix_web::{HttpRequest, HttpResponse, Scope};

use hb_model::student::{StudentActivities, StudentDetail, StudentSummary};
use hb_persistence::executor::DbExecutor;

use crate::api::{non_empty, Id};
use crate::config::ApiConfig;
use crate::dao::{StudentDao, StudentRecord};
use crate::error::{Error, OrNotFound, Result};
use crate::hours::{render_hours, HoursSummary};
use crate::utils::response;

pub fn register_endpoints(scope: Scope) -> Scope {
    scope
        .route("/all_students", get().to(get_students))
        .route("/student/{id}", get().to(get_student))
        .route("/all_activities/{id}", get().to(get_student_activities))
}

async fn get_students(
    db: Data<DbExecutor>,
    config: Data<ApiConfig>,
    req: HttpRequest,
) -> HttpResponse {
    response::json(&req, &config, list_students(&db).await)
}

async fn get_student(
    db: Data<DbExecutor>,
    config: Data<ApiConfig>,
    path: Path<Id>,
    req: HttpRequest,
) -> HttpResponse {
    let student_id = path.into_inner().id;
    response::json(&req, &config, student_detail(&db, student_id).await)
}

async fn get_student_activities(
    db: Data<DbExecutor>,
    config: Data<ApiConfig>,
    path: Path<Id>,
    req: HttpRequest,
) -> HttpResponse {
    let student_id = path.into_inner().id;
    response::json(&req, &config, student_activities(&db, student_id).await)
}

async fn list_students(db: &DbExecutor) -> Result<Vec<StudentSummary>> {
    let dao: StudentDao = db.as_dao();
    non_empty(dao.list().await?)
}

async fn student_detail(db: &DbExecutor, student_id: String) -> Result<StudentDetail> {
    let dao: StudentDao = db.as_dao();
    let record = dao.get(student_id).await.or_not_found()?;
    detail_from_record(record)
}

async fn student_activities(db: &DbExecutor, student_id: String) -> Result<StudentActivities> {
    let dao: StudentDao = db.as_dao();
    dao.activities(student_id).await.or_not_found()
}

fn detail_from_record(record: StudentRecord) -> Result<StudentDetail> {
    let StudentRecord {
        student,
        company,
        teacher,
        activities,
    } = record;

    let (company, teacher) = match (company, teacher) {
        (Some(company), Some(teacher)) => (company, teacher),
        _ => {
            log::warn!(
                "Student {} refers to missing company {} or teacher {}",
                student.id,
                student.company_id,
                student.teacher_id
            );
            return Err(Error::NotFound);
        }
    };

    let hours = HoursSummary::compute(student.total_hours_to_do, &activities);
    Ok(StudentDetail {
        id: student.id,
        name: student.name,
        company: company.name,
        teacher: teacher.name,
        total_hours_to_do: student.total_hours_to_do,
        total_time_required_done: render_hours(hours.required_done),
        total_time_optional_done: render_hours(hours.optional_done),
        required_remaining_time: render_hours(hours.remaining),
    })
}
