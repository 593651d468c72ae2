use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;

use crate::error::ServerError;
use crate::query::{QueryParameters, RequestQuery};

pub async fn health_check() -> (StatusCode, String) {
    (StatusCode::OK, "Healthy!".to_string())
}

pub async fn hello_world(RequestQuery(params): RequestQuery) -> String {
    let name = params.get("name").unwrap_or("World");
    format!("Hello {}, this is an AWS Lambda HTTP request", name)
}

pub async fn all_queries(RequestQuery(params): RequestQuery) -> Json<QueryParameters> {
    Json(params)
}

pub async fn single_query(
    Path(key): Path<String>,
    RequestQuery(params): RequestQuery,
) -> Result<Json<String>, ServerError> {
    params
        .get(&key)
        .map(|value| Json(value.to_string()))
        .ok_or_else(|| ServerError::NotFound(format!("query parameter '{key}'")))
}
