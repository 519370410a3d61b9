use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Stored phone record.
#[derive(ToSchema)]
pub struct PhoneDoc {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub price: f64,
}

/// Create/update payload. `id` must be left out.
#[derive(ToSchema)]
pub struct PhoneInputDoc {
    pub brand: String,
    pub model: String,
    pub price: f64,
}

/// Envelope around every `/api` response.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponseDoc {
    pub status_code: u16,
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::phones::list,
        crate::routes::phones::get,
        crate::routes::phones::create,
        crate::routes::phones::update,
        crate::routes::phones::delete,
    ),
    components(
        schemas(
            HealthResponse,
            PhoneDoc,
            PhoneInputDoc,
            ApiResponseDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "phones")
    )
)]
pub struct ApiDoc;
