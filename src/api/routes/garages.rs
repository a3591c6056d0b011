use actix_web::{web, HttpResponse};
use chrono::Utc;
use uuid::Uuid;

use crate::api::dtos::{ErrorResponse, GarageResponse, NearbyGaragesQuery, SlotsQuery};
use crate::api::routes::AppState;
use crate::domain::TimeSlot;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/garages")
            .route("", web::get().to(list_garages))
            .route("/nearby", web::get().to(nearby_garages))
            .route("/service/{service}", web::get().to(garages_by_service))
            .route("/{id}", web::get().to(get_garage))
            .route("/{id}/services", web::get().to(garage_services))
            .route("/{id}/slots", web::get().to(garage_slots)),
    );
}

#[utoipa::path(
    get,
    path = "/api/garages",
    responses(
        (status = 200, description = "All garages", body = [GarageResponse]),
    ),
    tag = "garages"
)]
pub async fn list_garages(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let result = state.garage_service.list().await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/garages/nearby",
    params(NearbyGaragesQuery),
    responses(
        (status = 200, description = "Garages within the given radius", body = [GarageResponse]),
        (status = 400, description = "Invalid coordinates or radius", body = ErrorResponse),
    ),
    tag = "garages"
)]
pub async fn nearby_garages(
    state: web::Data<AppState>,
    query: web::Query<NearbyGaragesQuery>,
) -> AppResult<HttpResponse> {
    let result = state.garage_service.nearby(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/garages/service/{service}",
    responses(
        (status = 200, description = "Garages offering the service", body = [GarageResponse]),
    ),
    tag = "garages"
)]
pub async fn garages_by_service(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let result = state.garage_service.by_service(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/garages/{id}",
    responses(
        (status = 200, description = "Garage details", body = GarageResponse),
        (status = 404, description = "Garage not found", body = ErrorResponse),
    ),
    tag = "garages"
)]
pub async fn get_garage(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let result = state.garage_service.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/garages/{id}/services",
    responses(
        (status = 200, description = "Service types offered by the garage", body = [String]),
        (status = 404, description = "Garage not found", body = ErrorResponse),
    ),
    tag = "garages"
)]
pub async fn garage_services(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let result = state
        .garage_service
        .service_menu(Some(path.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/garages/{id}/slots",
    params(SlotsQuery),
    responses(
        (status = 200, description = "Bookable time slots for the day", body = [TimeSlot]),
        (status = 400, description = "Date outside the booking horizon", body = ErrorResponse),
        (status = 404, description = "Garage not found", body = ErrorResponse),
    ),
    tag = "garages"
)]
pub async fn garage_slots(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<SlotsQuery>,
) -> AppResult<HttpResponse> {
    let result = state
        .garage_service
        .day_slots(path.into_inner(), query.date, Utc::now())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}
