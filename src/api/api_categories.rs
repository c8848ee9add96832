use crate::api::api::{api_catalog_error, api_parse_json, api_service_token};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::catalog::structs::category_input::CategoryInput;
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

#[tracing::instrument(skip(data), level = "debug")]
pub async fn api_service_category_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, &data) { return response; }

    match data.catalog.get_category(&path.into_inner()).await {
        Ok(category) => HttpResponse::Ok().content_type(ContentType::json()).json(category),
        Err(error) => api_catalog_error(error),
    }
}

#[tracing::instrument(skip(data), level = "debug")]
pub async fn api_service_category_products_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, &data) { return response; }

    match data.catalog.products_in_category(&path.into_inner()).await {
        Ok(products) => HttpResponse::Ok().content_type(ContentType::json()).json(products),
        Err(error) => api_catalog_error(error),
    }
}

#[tracing::instrument(skip(body, data), level = "debug")]
pub async fn api_service_categories_post(request: HttpRequest, body: web::Bytes, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, &data) { return response; }

    let input = match api_parse_json::<CategoryInput>(&body) {
        Ok(input) => input,
        Err(response) => return response,
    };
    if let Err(error) = input.validate() { return api_catalog_error(error); }

    match data.catalog.create_category(&input).await {
        Ok(category) => HttpResponse::Created().content_type(ContentType::json()).json(category),
        Err(error) => api_catalog_error(error),
    }
}
