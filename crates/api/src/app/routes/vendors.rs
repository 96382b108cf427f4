use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use vendorhub_core::VendorId;

use crate::app::dto::{self, CreateVendorsRequest, VendorBody};
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_vendors).post(create_vendors))
        .route(
            "/:id",
            get(get_vendor).put(replace_vendor).patch(patch_vendor),
        )
}

pub async fn list_vendors(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    dto::into_response(services.vendors().list().await)
}

pub async fn get_vendor(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    dto::into_response(services.vendors().get_by_id(&id).await)
}

pub async fn create_vendors(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<CreateVendorsRequest>,
) -> axum::response::Response {
    match body {
        CreateVendorsRequest::One(vendor) => {
            dto::into_response(services.vendors().create(vendor).await)
        }
        CreateVendorsRequest::Many(vendors) => {
            dto::into_response(services.vendors().create_many(vendors).await)
        }
    }
}

pub async fn replace_vendor(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<VendorBody>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    dto::into_response(services.vendors().replace(&id, body.into_inner()).await)
}

pub async fn patch_vendor(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<VendorBody>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    dto::into_response(services.vendors().patch(&id, body.into_inner()).await)
}

fn parse_id(raw: &str) -> Result<VendorId, axum::response::Response> {
    raw.parse()
        .map_err(|_| errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid vendor id"))
}
