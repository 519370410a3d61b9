use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use common::types::ApiResponse;
use models::phone::{self, PhoneInput};

use crate::errors::JsonApiError;
use crate::observability::{observe, Operation};
use crate::routes::ServerState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, JsonApiError>;

fn ok<T>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::new(StatusCode::OK.as_u16(), data))
}

#[utoipa::path(
    get, path = "/api/phones", tag = "phones",
    responses(
        (status = 200, description = "All phones", body = crate::openapi::ApiResponseDoc),
        (status = 500, description = "Store Failure", body = crate::openapi::ApiResponseDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> ApiResult<Vec<phone::Model>> {
    let phones = observe(Operation::GetAllPhones, String::new(), state.phones.get_all_phones()).await?;
    Ok(ok(phones))
}

#[utoipa::path(
    get, path = "/api/phones/{id}", tag = "phones",
    params(("id" = i64, Path, description = "Phone ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ApiResponseDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ApiResponseDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<phone::Model> {
    let Path(id) = id?;
    let found = observe(Operation::GetPhone, format!("id={id}"), state.phones.get_phone(id)).await?;
    Ok(ok(found))
}

#[utoipa::path(
    post, path = "/api/phones", tag = "phones",
    request_body = crate::openapi::PhoneInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ApiResponseDoc),
        (status = 400, description = "Incorrect Data", body = crate::openapi::ApiResponseDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<Option<PhoneInput>>, JsonRejection>,
) -> ApiResult<phone::Model> {
    let Json(input) = payload?;
    let params = format!("phone={input:?}");
    let created = observe(Operation::AddPhone, params, state.phones.add_phone(input.as_ref())).await?;
    Ok(ok(created))
}

#[utoipa::path(
    put, path = "/api/phones/{id}", tag = "phones",
    params(("id" = i64, Path, description = "Phone ID")),
    request_body = crate::openapi::PhoneInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ApiResponseDoc),
        (status = 400, description = "Incorrect Data", body = crate::openapi::ApiResponseDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ApiResponseDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Option<PhoneInput>>, JsonRejection>,
) -> ApiResult<phone::Model> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let params = format!("id={id}, phone={input:?}");
    let updated = observe(Operation::UpdatePhone, params, state.phones.update_phone(id, input.as_ref())).await?;
    Ok(ok(updated))
}

#[utoipa::path(
    delete, path = "/api/phones/{id}", tag = "phones",
    params(("id" = i64, Path, description = "Phone ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::ApiResponseDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ApiResponseDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<String> {
    let Path(id) = id?;
    observe(Operation::DeletePhone, format!("id={id}"), state.phones.delete_phone(id)).await?;
    Ok(ok(format!("Phone with id = {id} was successfully deleted")))
}
