//! SQL advisor handlers: fingerprinting utilities and the advise pipeline.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;

use fleetmeta_sqladvisor::{fingerprint, sql_id};

use crate::api::error_response;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AdviseRequest {
    pub db_id: i32,
    pub sql: String,
}

async fn get_fingerprint(path: web::Path<String>) -> HttpResponse {
    match fingerprint(&path) {
        Ok(text) => HttpResponse::Ok().json(json!({ "fingerprint": text })),
        Err(err) => error_response(&err.into()),
    }
}

async fn get_sql_id(path: web::Path<String>) -> HttpResponse {
    match sql_id(&path) {
        Ok(id) => HttpResponse::Ok().json(json!({ "sql_id": id })),
        Err(err) => error_response(&err.into()),
    }
}

async fn advise(state: web::Data<AppState>, body: web::Json<AdviseRequest>) -> HttpResponse {
    match state.advisor.advise(body.db_id, &body.sql).await {
        Ok(advice) => HttpResponse::Ok().json(advice),
        Err(err) => error_response(&err),
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sqladvisor")
            .route("/fingerprint/{sql:.*}", web::get().to(get_fingerprint))
            .route("/sql-id/{sql:.*}", web::get().to(get_sql_id))
            .route("/advise", web::post().to(advise)),
    );
}
