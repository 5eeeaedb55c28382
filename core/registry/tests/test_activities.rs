use actix_web::http::StatusCode;
use actix_web::test::{call_service, init_service, read_body_json, TestRequest};
use actix_web::App;
use serde_json::{json, Value};
use test_case::test_case;

use hb_framework_basic::{enable_logs, temp_dir};
use hb_registry::{ApiConfig, InvalidPayloadPolicy, MissingActivityPolicy, Registry};

mod common;
use common::*;

fn legacy_config() -> ApiConfig {
    ApiConfig {
        missing_activity: MissingActivityPolicy::NotFound,
        invalid_payload: InvalidPayloadPolicy::NotFound,
    }
}

#[actix_rt::test]
async fn test_create_and_fetch_activity() -> anyhow::Result<()> {
    enable_logs(false);
    let dir = temp_dir!("test_create_and_fetch_activity")?;
    let db = open_db(&dir)?;
    seed(&db).await?;
    let app = init_service(App::new().service(Registry::rest(&db, &ApiConfig::default()))).await;

    let resp = call_service(
        &app,
        post("/activity/s1", &activity_body("Obligatorio", json!(3))).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Value = read_body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["type"], "Obligatorio");
    assert_eq!(created["date"], "2021-05-03");
    assert_eq!(created["time"], "3");
    assert_eq!(created["description"], "Reviewed pull requests");

    let resp = call_service(&app, get(&format!("/activity/{}", id)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = read_body_json(resp).await;
    assert_eq!(fetched, json!([created]));

    let listed: Value =
        read_body_json(call_service(&app, get("/all_activities/s1").to_request()).await).await;
    assert_eq!(listed["activities"].as_array().unwrap().len(), 1);
    Ok(())
}

#[actix_rt::test]
async fn test_create_for_unknown_student() -> anyhow::Result<()> {
    enable_logs(false);
    let dir = temp_dir!("test_create_for_unknown_student")?;
    let db = open_db(&dir)?;
    seed(&db).await?;
    let app = init_service(App::new().service(Registry::rest(&db, &ApiConfig::default()))).await;

    let resp = call_service(
        &app,
        post("/activity/nobody", &activity_body("Obligatorio", json!(3))).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = read_body_json(resp).await;
    assert_eq!(body, not_found_message("/activity/nobody"));
    Ok(())
}

#[actix_rt::test]
async fn test_get_unknown_activity() -> anyhow::Result<()> {
    enable_logs(false);
    let dir = temp_dir!("test_get_unknown_activity")?;
    let db = open_db(&dir)?;
    let app = init_service(App::new().service(Registry::rest(&db, &ApiConfig::default()))).await;

    let resp = call_service(&app, get("/activity/missing").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = read_body_json(resp).await;
    assert_eq!(body, not_found_message("/activity/missing"));
    Ok(())
}

#[test_case(json!({"date": "d", "time": 1, "description": "x"}), "type" ; "missing type")]
#[test_case(json!({"type": "Obligatorio", "date": "", "time": 1, "description": "x"}), "date" ; "empty date")]
#[test_case(json!({"type": "Obligatorio", "date": "d", "time": 0, "description": "x"}), "time" ; "zero time")]
#[test_case(json!({"type": "Obligatorio", "date": "d", "time": 1}), "description" ; "missing description")]
#[actix_rt::test]
async fn test_invalid_body_is_rejected(body: Value, field: &str) {
    enable_logs(false);
    let dir = temp_dir!("test_invalid_body_is_rejected").unwrap();
    let db = open_db(&dir).unwrap();
    seed(&db).await.unwrap();
    let app = init_service(App::new().service(Registry::rest(&db, &ApiConfig::default()))).await;

    let resp = call_service(&app, post("/activity/s1", &body).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = read_body_json(resp).await;
    assert_eq!(
        error,
        json!({
            "message": format!("Datos no validos: missing or empty field '{}'", field),
            "status": 400
        })
    );

    let listed: Value =
        read_body_json(call_service(&app, get("/all_activities/s1").to_request()).await).await;
    assert_eq!(listed["activities"], json!([]));
}

#[actix_rt::test]
async fn test_non_numeric_time_is_rejected() -> anyhow::Result<()> {
    enable_logs(false);
    let dir = temp_dir!("test_non_numeric_time_is_rejected")?;
    let db = open_db(&dir)?;
    seed(&db).await?;
    let app = init_service(App::new().service(Registry::rest(&db, &ApiConfig::default()))).await;

    let resp = call_service(
        &app,
        post("/activity/s1", &activity_body("Obligatorio", json!("a while"))).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = read_body_json(resp).await;
    assert_eq!(error["status"], 400);
    assert!(error["message"]
        .as_str()
        .unwrap()
        .starts_with("Datos no validos: "));
    Ok(())
}

#[actix_rt::test]
async fn test_malformed_body_follows_payload_policy() -> anyhow::Result<()> {
    enable_logs(false);
    let dir = temp_dir!("test_malformed_body_follows_payload_policy")?;
    let db = open_db(&dir)?;
    seed(&db).await?;

    let malformed = || {
        TestRequest::post()
            .uri("/activity/s1")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"type\": ")
            .to_request()
    };

    let app = init_service(App::new().service(Registry::rest(&db, &ApiConfig::default()))).await;
    let resp = call_service(&app, malformed()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = read_body_json(resp).await;
    assert_eq!(error["status"], 400);

    let app = init_service(App::new().service(Registry::rest(&db, &legacy_config()))).await;
    let resp = call_service(&app, malformed()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: Value = read_body_json(resp).await;
    assert_eq!(error, not_found_message("/activity/s1"));
    Ok(())
}

#[actix_rt::test]
async fn test_invalid_body_under_legacy_policy() -> anyhow::Result<()> {
    enable_logs(false);
    let dir = temp_dir!("test_invalid_body_under_legacy_policy")?;
    let db = open_db(&dir)?;
    seed(&db).await?;
    let app = init_service(App::new().service(Registry::rest(&db, &legacy_config()))).await;

    let resp = call_service(
        &app,
        post("/activity/s1", &activity_body("Obligatorio", json!(0))).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: Value = read_body_json(resp).await;
    assert_eq!(error, not_found_message("/activity/s1"));

    let listed: Value =
        read_body_json(call_service(&app, get("/all_activities/s1").to_request()).await).await;
    assert_eq!(listed["activities"], json!([]));
    Ok(())
}

#[actix_rt::test]
async fn test_update_activity() -> anyhow::Result<()> {
    enable_logs(false);
    let dir = temp_dir!("test_update_activity")?;
    let db = open_db(&dir)?;
    seed(&db).await?;
    let app = init_service(App::new().service(Registry::rest(&db, &ApiConfig::default()))).await;

    let created: Value = read_body_json(
        call_service(
            &app,
            post("/activity/s1", &activity_body("Obligatorio", json!(3))).to_request(),
        )
        .await,
    )
    .await;
    let path = format!("/activity/{}", created["id"].as_str().unwrap());

    let update = json!({
        "type": "Charla",
        "date": "2021-06-01",
        "time": "4.5",
        "description": "Gave a talk"
    });
    let resp = call_service(&app, put(&path, &update).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let echoed: Value = read_body_json(resp).await;
    assert_eq!(echoed["id"], created["id"]);
    assert_eq!(echoed["type"], "Charla");
    assert_eq!(echoed["time"], "4.5");

    let fetched: Value = read_body_json(call_service(&app, get(&path).to_request()).await).await;
    assert_eq!(fetched, json!([echoed]));

    let detail: Value = read_body_json(call_service(&app, get("/student/s1").to_request()).await).await;
    assert_eq!(detail["total_time_required_done"], "0.0");
    assert_eq!(detail["total_time_optional_done"], "4.5");
    Ok(())
}

#[actix_rt::test]
async fn test_update_unknown_activity_is_ignored() -> anyhow::Result<()> {
    enable_logs(false);
    let dir = temp_dir!("test_update_unknown_activity_is_ignored")?;
    let db = open_db(&dir)?;
    let app = init_service(App::new().service(Registry::rest(&db, &ApiConfig::default()))).await;

    let resp = call_service(
        &app,
        put("/activity/ghost", &activity_body("Obligatorio", json!(2))).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let echoed: Value = read_body_json(resp).await;
    assert_eq!(echoed["id"], "ghost");
    assert_eq!(echoed["time"], "2");

    let resp = call_service(&app, get("/activity/ghost").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[actix_rt::test]
async fn test_update_unknown_activity_under_legacy_policy() -> anyhow::Result<()> {
    enable_logs(false);
    let dir = temp_dir!("test_update_unknown_activity_under_legacy_policy")?;
    let db = open_db(&dir)?;
    let app = init_service(App::new().service(Registry::rest(&db, &legacy_config()))).await;

    let resp = call_service(
        &app,
        put("/activity/ghost", &activity_body("Obligatorio", json!(2))).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: Value = read_body_json(resp).await;
    assert_eq!(error, not_found_message("/activity/ghost"));
    Ok(())
}

#[actix_rt::test]
async fn test_delete_activity_scrubs_references() -> anyhow::Result<()> {
    enable_logs(false);
    let dir = temp_dir!("test_delete_activity_scrubs_references")?;
    let db = open_db(&dir)?;
    seed(&db).await?;
    let app = init_service(App::new().service(Registry::rest(&db, &legacy_config()))).await;

    let created: Value = read_body_json(
        call_service(
            &app,
            post("/activity/s1", &activity_body("Obligatorio", json!(3))).to_request(),
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();
    let path = format!("/activity/{}", id);

    let resp = call_service(&app, delete(&path).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"message": format!("Actividad {} fue eliminada correctamente", id)})
    );

    let resp = call_service(&app, get(&path).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let listed: Value =
        read_body_json(call_service(&app, get("/all_activities/s1").to_request()).await).await;
    assert_eq!(listed["activities"], json!([]));

    // second delete finds nothing
    let resp = call_service(&app, delete(&path).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: Value = read_body_json(resp).await;
    assert_eq!(error, not_found_message(&path));
    Ok(())
}

#[actix_rt::test]
async fn test_delete_unknown_activity_is_ignored() -> anyhow::Result<()> {
    enable_logs(false);
    let dir = temp_dir!("test_delete_unknown_activity_is_ignored")?;
    let db = open_db(&dir)?;
    let app = init_service(App::new().service(Registry::rest(&db, &ApiConfig::default()))).await;

    let resp = call_service(&app, delete("/activity/ghost").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"message": "Actividad ghost fue eliminada correctamente"})
    );
    Ok(())
}

#[actix_rt::test]
async fn test_unsupported_method_is_not_found() -> anyhow::Result<()> {
    enable_logs(false);
    let dir = temp_dir!("test_unsupported_method_is_not_found")?;
    let db = open_db(&dir)?;
    let app = init_service(App::new().service(Registry::rest(&db, &ApiConfig::default()))).await;

    let req = TestRequest::patch().uri("/activity/a1").to_request();
    let resp = call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[actix_rt::test]
async fn test_delete_activity_under_default_policy() -> anyhow::Result<()> {
    enable_logs(false);
    let dir = temp_dir!("test_delete_activity_under_default_policy")?;
    let db = open_db(&dir)?;
    seed(&db).await?;
    let app = init_service(App::new().service(Registry::rest(&db, &ApiConfig::default()))).await;

    let created: Value = read_body_json(
        call_service(
            &app,
            post("/activity/s2", &activity_body("Charla", json!(2))).to_request(),
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();
    let path = format!("/activity/{}", id);

    let resp = call_service(&app, delete(&path).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"message": format!("Actividad {} fue eliminada correctamente", id)})
    );

    let resp = call_service(&app, get(&path).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let listed: Value =
        read_body_json(call_service(&app, get("/all_activities/s2").to_request()).await).await;
    assert_eq!(listed["activities"], json!([]));

    let detail: Value = read_body_json(call_service(&app, get("/student/s2").to_request()).await).await;
    assert_eq!(detail["total_time_optional_done"], "0.0");
    Ok(())
}

#[actix_rt::test]
async fn test_unknown_student_wins_over_bad_body() -> anyhow::Result<()> {
    enable_logs(false);
    let dir = temp_dir!("test_unknown_student_wins_over_bad_body")?;
    let db = open_db(&dir)?;
    seed(&db).await?;
    let app = init_service(App::new().service(Registry::rest(&db, &ApiConfig::default()))).await;

    let requests = vec![
        // wrong field type
        post(
            "/activity/nobody",
            &json!({"type": 5, "date": "d", "time": 1, "description": "x"}),
        )
        .to_request(),
        // missing fields
        post("/activity/nobody", &json!({"type": "Obligatorio"})).to_request(),
        // not json at all
        TestRequest::post()
            .uri("/activity/nobody")
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .set_payload("type=Obligatorio&time=3")
            .to_request(),
    ];

    for req in requests {
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body, not_found_message("/activity/nobody"));
    }

    // the same bad body on a known student is a validation error
    let resp = call_service(
        &app,
        post(
            "/activity/s1",
            &json!({"type": 5, "date": "d", "time": 1, "description": "x"}),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
