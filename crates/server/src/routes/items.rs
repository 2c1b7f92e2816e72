use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::items::{Item, ItemPatch, NewItem};
use tracing::info;

use crate::{errors::JsonApiError, extract::JsonBody, routes::ServerState};

#[utoipa::path(
    get, path = "/items", tag = "items",
    responses(
        (status = 200, description = "OK", body = [crate::openapi::Item])
    )
)]
pub async fn list_items(State(state): State<ServerState>) -> Json<Vec<Item>> {
    let items = state.items.list().await;
    info!(count = items.len(), "list items");
    Json(items)
}

#[utoipa::path(
    post, path = "/items", tag = "items",
    request_body = crate::openapi::NewItem,
    responses(
        (status = 201, description = "Created", body = crate::openapi::Item),
        (status = 400, description = "Invalid payload", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create_item(
    State(state): State<ServerState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<Item>), JsonApiError> {
    let input = NewItem::from_json(&body)?;
    let item = state.items.create(input).await?;
    info!(id = %item.id, name = %item.name, quantity = item.quantity, "created item");
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    get, path = "/items/{id}", tag = "items",
    params(("id" = String, Path, description = "Item id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::Item),
        (status = 404, description = "Not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, JsonApiError> {
    Ok(Json(state.items.get(&id).await?))
}

/// Fields that fail validation are ignored rather than rejected; a body with
/// no acceptable field returns the item unchanged.
#[utoipa::path(
    put, path = "/items/{id}", tag = "items",
    params(("id" = String, Path, description = "Item id")),
    request_body = crate::openapi::UpdateItem,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::Item),
        (status = 404, description = "Not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Item>, JsonApiError> {
    let patch = ItemPatch::from_json(&body);
    let item = state.items.update(&id, patch).await?;
    info!(id = %item.id, "updated item");
    Ok(Json(item))
}

#[utoipa::path(
    delete, path = "/items/{id}", tag = "items",
    params(("id" = String, Path, description = "Item id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    state.items.delete(&id).await?;
    info!(%id, "deleted item");
    Ok(StatusCode::NO_CONTENT)
}
