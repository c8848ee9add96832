use crate::api::api_categories::{api_service_categories_post, api_service_category_get, api_service_category_products_get};
use crate::api::api_products::{
    api_service_product_category_get, api_service_product_delete, api_service_product_get,
    api_service_product_patch, api_service_product_rating_get, api_service_product_reviews_get,
    api_service_product_reviews_post, api_service_product_variants_get, api_service_product_variants_post,
    api_service_products_get, api_service_products_post,
};
use crate::api::api_stats::{api_service_health_get, api_service_prom_get, api_service_stats_get};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::query_token::QueryToken;
use crate::catalog::errors::CatalogError;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::database::errors::StoreError;
use actix_cors::Cors;
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, http, web};
use log::{error, info};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

pub fn api_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn api_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.default_service(web::route().to(api_service_not_found));
        cfg.service(web::resource("/api/products")
            .route(web::get().to(api_service_products_get))
            .route(web::post().to(api_service_products_post)));
        cfg.service(web::resource("/api/product/{id}")
            .route(web::get().to(api_service_product_get))
            .route(web::patch().to(api_service_product_patch))
            .route(web::delete().to(api_service_product_delete)));
        cfg.service(web::resource("/api/product/{id}/category").route(web::get().to(api_service_product_category_get)));
        cfg.service(web::resource("/api/product/{id}/reviews")
            .route(web::get().to(api_service_product_reviews_get))
            .route(web::post().to(api_service_product_reviews_post)));
        cfg.service(web::resource("/api/product/{id}/variants")
            .route(web::get().to(api_service_product_variants_get))
            .route(web::post().to(api_service_product_variants_post)));
        cfg.service(web::resource("/api/product/{id}/rating").route(web::get().to(api_service_product_rating_get)));
        cfg.service(web::resource("/api/category/{id}").route(web::get().to(api_service_category_get)));
        cfg.service(web::resource("/api/category/{id}/products").route(web::get().to(api_service_category_products_get)));
        cfg.service(web::resource("/api/categories").route(web::post().to(api_service_categories_post)));
        cfg.service(web::resource("/api/stats").route(web::get().to(api_service_stats_get)));
        cfg.service(web::resource("/api/metrics").route(web::get().to(api_service_prom_get)));
        cfg.service(web::resource("/api/health").route(web::get().to(api_service_health_get)));
    })
}

pub fn api_service(
    addr: SocketAddr,
    data: Arc<ApiServiceData>,
    config: &ApiServerConfig,
) -> Result<(ServerHandle, Server), std::io::Error>
{
    info!("[API] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(api_service_cors())
            .configure(api_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .workers(config.threads.max(1) as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub fn api_service_token(request: &HttpRequest, data: &ApiServiceData) -> Option<HttpResponse>
{
    let token = match web::Query::<QueryToken>::from_query(request.query_string()) {
        Ok(params) => params.into_inner().token,
        Err(_) => None,
    };
    match token {
        None => Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
            "status": "missing token"
        }))),
        Some(token_code) if token_code != data.config.api_server.api_key => {
            Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                "status": "invalid token"
            })))
        }
        Some(_) => None,
    }
}

pub fn api_parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, HttpResponse>
{
    serde_json::from_slice::<T>(body).map_err(|error| {
        HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
            "status": "bad json body",
            "message": error.to_string()
        }))
    })
}

pub fn api_catalog_error(error: CatalogError) -> HttpResponse
{
    match error {
        CatalogError::NotFound { entity, id } => {
            HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
                "status": format!("unknown {}", entity),
                "id": id
            }))
        }
        CatalogError::ValidationFailed(message) => {
            HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
                "status": "validation failed",
                "message": message
            }))
        }
        CatalogError::StoreQueryFailed(StoreError::Constraint(message)) => {
            HttpResponse::Conflict().content_type(ContentType::json()).json(json!({
                "status": "constraint violation",
                "message": message
            }))
        }
        CatalogError::StoreQueryFailed(store_error) => {
            error!("[API] Store failure: {}", store_error);
            HttpResponse::InternalServerError().content_type(ContentType::json()).json(json!({
                "status": "store failure"
            }))
        }
    }
}

pub async fn api_service_not_found(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, &data) { return response; }

    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}
