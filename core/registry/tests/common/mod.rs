#![allow(dead_code)]

use actix_web::test::TestRequest;
use diesel::sql_types::Text;
use diesel::RunQueryDsl;
use serde_json::{json, Value};
use tempdir::TempDir;

use hb_persistence::executor::{do_with_transaction, DbExecutor};
use hb_registry::dao::ImportSummary;
use hb_registry::{Fixtures, Registry};

pub fn open_db(dir: &TempDir) -> anyhow::Result<DbExecutor> {
    let db = DbExecutor::from_data_dir(dir.path(), "hourbook")?;
    Registry::migrate(&db)?;
    Ok(db)
}

/// Loads `tests/resources/fixtures.json`: students s1 and s2 with resolvable
/// company and teacher, s3 pointing at a company that does not exist and s4
/// at a teacher that does not exist.
pub async fn seed(db: &DbExecutor) -> anyhow::Result<ImportSummary> {
    let fixtures = Fixtures::from_path(&hb_framework_basic::resource!("fixtures.json"))?;
    Registry::import(db, fixtures).await
}

/// Appends a raw reference row, whether or not the activity exists.
pub async fn append_reference(
    db: &DbExecutor,
    student_id: &str,
    activity_id: &str,
) -> anyhow::Result<()> {
    let student_id = student_id.to_string();
    let activity_id = activity_id.to_string();
    do_with_transaction(&db.pool, "test_append_reference", move |conn| {
        diesel::sql_query(
            "INSERT INTO student_activity (student_id, activity_id) VALUES (?, ?)",
        )
        .bind::<Text, _>(student_id)
        .bind::<Text, _>(activity_id)
        .execute(conn)?;
        Ok::<_, anyhow::Error>(())
    })
    .await
}

pub fn activity_body(kind: &str, time: Value) -> Value {
    json!({
        "type": kind,
        "date": "2021-05-03",
        "time": time,
        "description": "Reviewed pull requests"
    })
}

pub fn not_found_message(path: &str) -> Value {
    json!({
        "message": format!("Recurso no encontrado: http://localhost:8080{}", path),
        "status": 404
    })
}

pub fn get(path: &str) -> TestRequest {
    TestRequest::get().uri(path)
}

pub fn post(path: &str, body: &Value) -> TestRequest {
    TestRequest::post().uri(path).set_json(body)
}

pub fn put(path: &str, body: &Value) -> TestRequest {
    TestRequest::put().uri(path).set_json(body)
}

pub fn delete(path: &str) -> TestRequest {
    TestRequest::delete().uri(path)
}
