//! Menu CRUD routes.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use menud_core::MenuItemId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_menu).post(create_menu_item))
        .route("/:id", put(update_menu_item).delete(delete_menu_item))
}

pub async fn list_menu(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.list_items().await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::menu_error_to_response(e, StatusCode::INTERNAL_SERVER_ERROR),
    }
}

pub async fn create_menu_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateMenuItemRequest>, JsonRejection>,
) -> axum::response::Response {
    // A malformed or wrong-typed body is the caller's fault; report it in
    // the same JSON error shape as every other client error.
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "validation_error",
                rejection.body_text(),
            )
        }
    };

    let new = match body.into_new_item() {
        Ok(new) => new,
        Err(e) => return errors::menu_error_to_response(e, StatusCode::INTERNAL_SERVER_ERROR),
    };

    match services.create_item(new).await {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => errors::menu_error_to_response(e, StatusCode::INTERNAL_SERVER_ERROR),
    }
}

pub async fn update_menu_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::UpdateMenuItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let id: MenuItemId = match id.parse() {
        Ok(id) => id,
        Err(e) => return errors::menu_error_to_response(e, StatusCode::BAD_REQUEST),
    };

    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "validation_error",
                rejection.body_text(),
            )
        }
    };

    match services.update_item(id, body.into_patch()).await {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::menu_error_to_response(e, StatusCode::BAD_REQUEST),
    }
}

pub async fn delete_menu_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: MenuItemId = match id.parse() {
        Ok(id) => id,
        Err(e) => return errors::menu_error_to_response(e, StatusCode::BAD_REQUEST),
    };

    match services.delete_item(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Menu item deleted successfully" })),
        )
            .into_response(),
        Err(e) => errors::menu_error_to_response(e, StatusCode::BAD_REQUEST),
    }
}
