use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::api::dtos::{CreateVehicleRequest, ErrorResponse, UpdateVehicleRequest, VehicleResponse};
use crate::api::routes::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/vehicles")
            .route("", web::get().to(list_vehicles))
            .route("", web::post().to(create_vehicle))
            .route("/{id}", web::patch().to(update_vehicle))
            .route("/{id}", web::delete().to(delete_vehicle)),
    );
}

#[utoipa::path(
    get,
    path = "/api/vehicles",
    responses(
        (status = 200, description = "Vehicles of the authenticated user", body = [VehicleResponse]),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "vehicles"
)]
pub async fn list_vehicles(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let result = state.vehicle_service.list(auth.user_id).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    post,
    path = "/api/vehicles",
    request_body = CreateVehicleRequest,
    responses(
        (status = 201, description = "Vehicle created", body = VehicleResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "vehicles"
)]
pub async fn create_vehicle(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    payload: web::Json<CreateVehicleRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .vehicle_service
        .create(auth.user_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(result))
}

#[utoipa::path(
    patch,
    path = "/api/vehicles/{id}",
    request_body = UpdateVehicleRequest,
    responses(
        (status = 200, description = "Vehicle updated", body = VehicleResponse),
        (status = 403, description = "Vehicle belongs to another user", body = ErrorResponse),
        (status = 404, description = "Vehicle not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "vehicles"
)]
pub async fn update_vehicle(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateVehicleRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .vehicle_service
        .update(auth.user_id, path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    delete,
    path = "/api/vehicles/{id}",
    responses(
        (status = 204, description = "Vehicle deleted"),
        (status = 403, description = "Vehicle belongs to another user", body = ErrorResponse),
        (status = 404, description = "Vehicle not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "vehicles"
)]
pub async fn delete_vehicle(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state
        .vehicle_service
        .delete(auth.user_id, path.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
