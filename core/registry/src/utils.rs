use actix_web::HttpRequest;

/// Full URL of the request as the client addressed it.
pub fn request_url(req: &HttpRequest) -> String {
    let conn_info = req.connection_info();
    format!("{}://{}{}", conn_info.scheme(), conn_info.host(), req.uri())
}

pub mod response {
    use actix_web::{HttpRequest, HttpResponse};
    use serde::Serialize;

    use hb_model::ErrorMessage;

    use crate::config::{ApiConfig, InvalidPayloadPolicy};
    use crate::error::Error;

    pub fn ok<T: Serialize>(t: T) -> HttpResponse {
        HttpResponse::Ok().json(t)
    }

    pub fn not_found(req: &HttpRequest) -> HttpResponse {
        let url = super::request_url(req);
        log::debug!("Resource not found: {}", url);
        HttpResponse::NotFound().json(ErrorMessage::not_found(url))
    }

    pub fn bad_request(e: &impl ToString) -> HttpResponse {
        HttpResponse::BadRequest().json(ErrorMessage::invalid(e.to_string()))
    }

    pub fn server_error(e: &impl ToString) -> HttpResponse {
        let e = e.to_string();
        log::error!("Hourbook API server error: {}", e);
        HttpResponse::InternalServerError().json(ErrorMessage::internal(e))
    }

    pub fn error(req: &HttpRequest, config: &ApiConfig, e: Error) -> HttpResponse {
        match e {
            Error::NotFound => not_found(req),
            Error::Validation(e) => match config.invalid_payload {
                InvalidPayloadPolicy::Reject => bad_request(&e),
                InvalidPayloadPolicy::NotFound => {
                    log::debug!("Invalid payload answered as not found: {}", e);
                    not_found(req)
                }
            },
            Error::Database(e) => server_error(&e),
        }
    }

    pub fn json<T: Serialize>(
        req: &HttpRequest,
        config: &ApiConfig,
        result: Result<T, Error>,
    ) -> HttpResponse {
        match result {
            Ok(t) => ok(t),
            Err(e) => error(req, config, e),
        }
    }
}
