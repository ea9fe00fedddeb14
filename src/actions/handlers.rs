//! HTTP surface of the tip action.

use actix_cors::Cors;
use actix_web::{get, http::header, middleware::DefaultHeaders, post, web, HttpResponse, Responder};
use tracing::error;

use crate::actions::openapi;
use crate::actions::service::TipService;
use crate::actions::types::{ActionPostRequest, ActionRule, ActionsJson};
use crate::error::TipError;

/// Version of the Actions convention the responses follow.
pub const ACTION_VERSION: &str = "2.1.3";
/// CAIP-2 id of Solana mainnet-beta.
pub const BLOCKCHAIN_IDS: &str = "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp";

fn log_failure(route: &str, handle: &str, err: &TipError) {
    error!(?err, "{} for @{} failed", route, handle);
}

/// GET /{handle}
#[get("/{handle}")]
async fn get_tip(service: web::Data<TipService>, path: web::Path<String>) -> Result<HttpResponse, TipError> {
    let handle = path.into_inner();
    match service.metadata(&handle).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            log_failure("GET metadata", &handle, &e);
            Err(e)
        }
    }
}

/// GET /{handle}/{amount}
#[get("/{handle}/{amount}")]
async fn get_tip_amount(
    service: web::Data<TipService>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, TipError> {
    let (handle, amount) = path.into_inner();
    match service.amount_metadata(&handle, &amount).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            log_failure("GET amount metadata", &handle, &e);
            Err(e)
        }
    }
}

/// POST /{handle}
#[post("/{handle}")]
async fn post_tip(
    service: web::Data<TipService>,
    path: web::Path<String>,
    req: web::Json<ActionPostRequest>,
) -> Result<HttpResponse, TipError> {
    let handle = path.into_inner();
    tip(&service, &handle, None, &req.account).await
}

/// POST /{handle}/{amount}
#[post("/{handle}/{amount}")]
async fn post_tip_amount(
    service: web::Data<TipService>,
    path: web::Path<(String, String)>,
    req: web::Json<ActionPostRequest>,
) -> Result<HttpResponse, TipError> {
    let (handle, amount) = path.into_inner();
    tip(&service, &handle, Some(&amount), &req.account).await
}

async fn tip(
    service: &TipService,
    handle: &str,
    amount: Option<&str>,
    account: &str,
) -> Result<HttpResponse, TipError> {
    match service.tip_transaction(handle, amount, account).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            log_failure("POST transaction", handle, &e);
            Err(e)
        }
    }
}

/// Liveness check
#[get("/_/healthz")]
async fn healthz() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Maps every path on this host to the action API.
#[get("/actions.json")]
async fn actions_json() -> impl Responder {
    HttpResponse::Ok().json(ActionsJson {
        rules: vec![ActionRule {
            path_pattern: "/*".to_string(),
            api_path: "/*".to_string(),
        }],
    })
}

/// OpenAPI document for the tip routes.
#[get("/_/doc")]
async fn doc() -> impl Responder {
    HttpResponse::Ok().json(openapi::document())
}

/// CORS policy required by Actions clients: any origin, any method.
///
/// Only answers requests that carry `Origin`; `action_headers` covers the rest.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .expose_any_header()
}

/// Headers every Actions response carries, with or without `Origin`.
pub fn action_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add(("X-Action-Version", ACTION_VERSION))
        .add(("X-Blockchain-Ids", BLOCKCHAIN_IDS))
}

/// Mount the tip routes. Service routes live under `/_/`, where the second
/// segment can never be a valid tip amount, so they shadow no tip URL.
/// `/actions.json` has to sit at the root.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        TipError::InvalidRequest(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        TipError::InvalidRequest(err.to_string()).into()
    }))
    .service(healthz)
    .service(actions_json)
    .service(doc)
    .service(get_tip)
    .service(get_tip_amount)
    .service(post_tip)
    .service(post_tip_amount);
}
