use crate::api::api::{api_catalog_error, api_parse_json, api_service_token};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::query_pagination::QueryPagination;
use crate::catalog::helpers::page;
use crate::catalog::structs::product_input::ProductInput;
use crate::catalog::structs::product_update::ProductUpdate;
use crate::catalog::structs::review_input::ReviewInput;
use crate::catalog::structs::variant_input::VariantInput;
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;
use std::sync::Arc;

#[tracing::instrument(skip(data), level = "debug")]
pub async fn api_service_products_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, &data) { return response; }

    let params = match web::Query::<QueryPagination>::from_query(request.query_string()) {
        Ok(params) => params.into_inner(),
        Err(_) => return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": "bad pagination"})),
    };
    let (limit, offset) = match page(params.limit, params.offset, data.config.catalog.max_page_size) {
        Ok(page) => page,
        Err(error) => return api_catalog_error(error),
    };

    match data.catalog.list_products(limit, offset).await {
        Ok(products) => HttpResponse::Ok().content_type(ContentType::json()).json(products),
        Err(error) => api_catalog_error(error),
    }
}

#[tracing::instrument(skip(body, data), level = "debug")]
pub async fn api_service_products_post(request: HttpRequest, body: web::Bytes, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, &data) { return response; }

    let input = match api_parse_json::<ProductInput>(&body) {
        Ok(input) => input,
        Err(response) => return response,
    };
    if let Err(error) = input.validate() { return api_catalog_error(error); }

    match data.catalog.create_product(&input).await {
        Ok(product) => HttpResponse::Created().content_type(ContentType::json()).json(product),
        Err(error) => api_catalog_error(error),
    }
}

#[tracing::instrument(skip(data), level = "debug")]
pub async fn api_service_product_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, &data) { return response; }

    match data.catalog.get_product(&path.into_inner()).await {
        Ok(product) => HttpResponse::Ok().content_type(ContentType::json()).json(product),
        Err(error) => api_catalog_error(error),
    }
}

#[tracing::instrument(skip(body, data), level = "debug")]
pub async fn api_service_product_patch(request: HttpRequest, path: web::Path<String>, body: web::Bytes, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, &data) { return response; }

    let update = match api_parse_json::<ProductUpdate>(&body) {
        Ok(update) => update,
        Err(response) => return response,
    };
    if let Err(error) = update.validate() { return api_catalog_error(error); }

    match data.catalog.update_product(&path.into_inner(), &update).await {
        Ok(product) => HttpResponse::Ok().content_type(ContentType::json()).json(product),
        Err(error) => api_catalog_error(error),
    }
}

#[tracing::instrument(skip(data), level = "debug")]
pub async fn api_service_product_delete(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, &data) { return response; }

    match data.catalog.delete_product(&path.into_inner()).await {
        Ok(product) => HttpResponse::Ok().content_type(ContentType::json()).json(product),
        Err(error) => api_catalog_error(error),
    }
}

#[tracing::instrument(skip(data), level = "debug")]
pub async fn api_service_product_category_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, &data) { return response; }

    let product = match data.catalog.get_product(&path.into_inner()).await {
        Ok(product) => product,
        Err(error) => return api_catalog_error(error),
    };
    match data.catalog.category_for(&product).await {
        Ok(category) => HttpResponse::Ok().content_type(ContentType::json()).json(category),
        Err(error) => api_catalog_error(error),
    }
}

#[tracing::instrument(skip(data), level = "debug")]
pub async fn api_service_product_reviews_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, &data) { return response; }

    match data.catalog.reviews(&path.into_inner()).await {
        Ok(reviews) => HttpResponse::Ok().content_type(ContentType::json()).json(reviews),
        Err(error) => api_catalog_error(error),
    }
}

#[tracing::instrument(skip(body, data), level = "debug")]
pub async fn api_service_product_reviews_post(request: HttpRequest, path: web::Path<String>, body: web::Bytes, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, &data) { return response; }

    let mut input = match api_parse_json::<ReviewInput>(&body) {
        Ok(input) => input,
        Err(response) => return response,
    };
    input.product_id = path.into_inner();
    if let Err(error) = input.validate() { return api_catalog_error(error); }

    match data.catalog.create_review(&input).await {
        Ok(review) => HttpResponse::Created().content_type(ContentType::json()).json(review),
        Err(error) => api_catalog_error(error),
    }
}

#[tracing::instrument(skip(data), level = "debug")]
pub async fn api_service_product_variants_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, &data) { return response; }

    match data.catalog.variants(&path.into_inner()).await {
        Ok(variants) => HttpResponse::Ok().content_type(ContentType::json()).json(variants),
        Err(error) => api_catalog_error(error),
    }
}

#[tracing::instrument(skip(body, data), level = "debug")]
pub async fn api_service_product_variants_post(request: HttpRequest, path: web::Path<String>, body: web::Bytes, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, &data) { return response; }

    let input = match api_parse_json::<VariantInput>(&body) {
        Ok(input) => input,
        Err(response) => return response,
    };
    if let Err(error) = input.validate() { return api_catalog_error(error); }

    match data.catalog.add_variant(&path.into_inner(), &input).await {
        Ok(variant) => HttpResponse::Created().content_type(ContentType::json()).json(variant),
        Err(error) => api_catalog_error(error),
    }
}

#[tracing::instrument(skip(data), level = "debug")]
pub async fn api_service_product_rating_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, &data) { return response; }

    match data.catalog.average_rating(&path.into_inner()).await {
        Ok(rating) => HttpResponse::Ok().content_type(ContentType::json()).json(rating),
        Err(error) => api_catalog_error(error),
    }
}
