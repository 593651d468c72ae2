pub mod config;
pub mod endpoints;
pub mod error;
pub mod logging;
pub mod query;

pub use error::ServerError;
pub use query::{
    queries, query, HttpRequestData, HttpRequestDataExt, QueryParameters, RequestQuery,
};

use axum::routing::get;
use axum::Router;

/// Builds the function's router.
pub fn app() -> Router {
    let other_route = Router::new().route("/health", get(endpoints::health_check));
    let hello_world = Router::new().route("/hello", get(endpoints::hello_world));
    let query_routes = Router::new()
        .route("/queries", get(endpoints::all_queries))
        .route("/query/{key}", get(endpoints::single_query));

    // Add support for cors later when needed
    Router::new()
        .merge(other_route)
        .merge(hello_world)
        .merge(query_routes)
}
