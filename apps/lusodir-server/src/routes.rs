//! HTTP routes.
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/api/business-directory/search` | GET | Hybrid business search |
//! | `/health` | GET | Liveness check |

use lusodir_core::types::RawSearchParams;
use lusodir_hybrid::{BusinessSearchService, FailureBody, SuccessBody};
use rocket::figment::Provider;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, routes, Build, FromForm, Rocket, State};
use serde_json::{json, Value};
use std::sync::Arc;

/// Managed state: the one service instance shared by every request.
#[derive(Clone)]
pub struct SearchState {
    pub service: Arc<BusinessSearchService>,
}

/// Query string of the search endpoint. Every scalar is taken as a raw
/// string; parsing and clamping belong to the service.
#[derive(Debug, Default, FromForm)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
    /// Accepts `types=a&types=b` and `types[]=a&types[]=b`.
    pub types: Vec<String>,
    #[field(name = "minRating")]
    pub min_rating: Option<String>,
    pub verified: Option<String>,
    pub limit: Option<String>,
}

impl From<SearchQuery> for RawSearchParams {
    fn from(q: SearchQuery) -> Self {
        RawSearchParams {
            q: q.q,
            lat: q.lat,
            lng: q.lng,
            radius: q.radius,
            types: q.types,
            min_rating: q.min_rating,
            verified: q.verified,
            limit: q.limit,
        }
    }
}

#[get("/api/business-directory/search?<params..>")]
pub async fn search_businesses(
    state: &State<SearchState>,
    params: SearchQuery,
) -> Result<Json<SuccessBody>, (Status, Json<FailureBody>)> {
    let raw = RawSearchParams::from(params);
    match state.service.handle(&raw).await {
        Ok(response) => Ok(Json(SuccessBody::from(response))),
        Err(failure) => {
            let status = Status::from_code(failure.status_code()).unwrap_or(Status::InternalServerError);
            Err((status, Json(failure.body())))
        }
    }
}

#[get("/health")]
pub fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Build the Rocket instance around an already constructed service.
pub fn build_rocket<P: Provider>(service: BusinessSearchService, figment: P) -> Rocket<Build> {
    rocket::custom(figment)
        .manage(SearchState { service: Arc::new(service) })
        .mount("/", routes![search_businesses, health])
}
