use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub ok: bool }

#[derive(ToSchema)]
pub struct Item { pub id: String, pub name: String, pub quantity: i64 }

#[derive(ToSchema)]
pub struct NewItem {
    pub name: String,
    #[schema(minimum = 0)]
    pub quantity: i64,
}

#[derive(ToSchema)]
pub struct UpdateItem {
    pub name: Option<String>,
    #[schema(minimum = 0)]
    pub quantity: Option<i64>,
}

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String }

#[derive(OpenApi)]
#[openapi(
    info(title = "Items API", version = "0.1.0"),
    paths(
        crate::routes::health,
        crate::routes::items::list_items,
        crate::routes::items::create_item,
        crate::routes::items::get_item,
        crate::routes::items::update_item,
        crate::routes::items::delete_item,
    ),
    components(
        schemas(
            HealthResponse,
            Item,
            NewItem,
            UpdateItem,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "items")
    )
)]
pub struct ApiDoc;
