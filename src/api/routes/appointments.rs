use actix_web::{web, HttpResponse};
use chrono::Utc;
use uuid::Uuid;

use crate::api::dtos::{
    AppointmentResponse, CreateAppointmentRequest, ErrorResponse, UpdateAppointmentRequest,
};
use crate::api::routes::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/appointments")
            .route("", web::get().to(list_appointments))
            .route("", web::post().to(create_appointment))
            .route("/{id}", web::patch().to(update_appointment))
            .route("/{id}", web::delete().to(delete_appointment)),
    );
}

#[utoipa::path(
    get,
    path = "/api/appointments",
    responses(
        (status = 200, description = "Appointments of the authenticated user", body = [AppointmentResponse]),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "appointments"
)]
pub async fn list_appointments(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let result = state.appointment_service.list(auth.user_id).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    post,
    path = "/api/appointments",
    request_body = CreateAppointmentRequest,
    responses(
        (status = 201, description = "Appointment booked", body = AppointmentResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Vehicle belongs to another user", body = ErrorResponse),
        (status = 404, description = "Garage or vehicle not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "appointments"
)]
pub async fn create_appointment(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    payload: web::Json<CreateAppointmentRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .appointment_service
        .create(auth.user_id, payload.into_inner(), Utc::now())
        .await?;
    Ok(HttpResponse::Created().json(result))
}

#[utoipa::path(
    patch,
    path = "/api/appointments/{id}",
    request_body = UpdateAppointmentRequest,
    responses(
        (status = 200, description = "Appointment updated", body = AppointmentResponse),
        (status = 403, description = "Appointment belongs to another user", body = ErrorResponse),
        (status = 404, description = "Appointment not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "appointments"
)]
pub async fn update_appointment(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateAppointmentRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .appointment_service
        .update(
            auth.user_id,
            path.into_inner(),
            payload.into_inner(),
            Utc::now(),
        )
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    delete,
    path = "/api/appointments/{id}",
    responses(
        (status = 204, description = "Appointment cancelled"),
        (status = 403, description = "Appointment belongs to another user", body = ErrorResponse),
        (status = 404, description = "Appointment not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "appointments"
)]
pub async fn delete_appointment(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state
        .appointment_service
        .delete(auth.user_id, path.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
