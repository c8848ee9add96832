use crate::api::api::api_service_token;
use crate::api::structs::api_service_data::ApiServiceData;
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;
use std::sync::Arc;

const PROMETHEUS_ID: &str = "catalog";

#[tracing::instrument(skip(data), level = "debug")]
pub async fn api_service_stats_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, &data) { return response; }

    HttpResponse::Ok().content_type(ContentType::json()).json(data.catalog.get_stats())
}

#[tracing::instrument(skip(data), level = "debug")]
pub async fn api_service_prom_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, &data) { return response; }

    let stats = data.catalog.get_stats();
    let pending = data.catalog.pending_invalidations().len() as i64;
    let mut string_output = String::with_capacity(2048);

    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "gauge", "pending_invalidations", pending, true, Some(&format!("{PROMETHEUS_ID} gauge metrics"))));

    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "cache_hits", stats.cache_hits, true, Some(&format!("{PROMETHEUS_ID} counter metrics"))));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "cache_misses", stats.cache_misses, false, None));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "cache_errors", stats.cache_errors, false, None));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "negative_hits", stats.negative_hits, false, None));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "bypassed_reads", stats.bypassed_reads, false, None));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "store_queries", stats.store_queries, false, None));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "store_errors", stats.store_errors, false, None));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "invalidations", stats.invalidations, false, None));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "invalidation_failures", stats.invalidation_failures, false, None));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "invalidation_retries", stats.invalidation_retries, false, None));

    HttpResponse::Ok().content_type(ContentType::plaintext()).body(string_output)
}

pub fn api_service_prom_generate_line(id: &str, type_metric: &str, metric: &str, value: i64, without_header: bool, description: Option<&str>) -> String
{
    if without_header {
        format!(
            "# HELP {}_{} {}\n# TYPE {}_{} {}\n{}_{}{{metric=\"{}\"}} {}\n",
            id, type_metric, description.unwrap_or(""),
            id, type_metric, type_metric,
            id, type_metric, metric, value
        )
    } else {
        format!("{id}_{type_metric}{{metric=\"{metric}\"}} {value}\n")
    }
}

#[tracing::instrument(skip(data), level = "debug")]
pub async fn api_service_health_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, &data) { return response; }

    let cache = match data.catalog.cache() {
        None => json!({"enabled": false}),
        Some(cache) => json!({
            "enabled": true,
            "engine": cache.engine(),
            "connected": cache.is_connected(),
            "circuit": cache.circuit_state(),
            "rejected_calls": cache.breaker().rejected(),
        }),
    };

    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": "ok",
        "cache": cache,
        "pending_invalidations": data.catalog.pending_invalidations(),
    }))
}
