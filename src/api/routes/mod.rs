use std::sync::Arc;

use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::application::{AppointmentService, AuthService, GarageService, VehicleService};
use crate::error::{AppError, AppResult};

pub mod appointments;
pub mod auth;
pub mod garages;
pub mod vehicles;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub vehicle_service: Arc<VehicleService>,
    pub garage_service: Arc<GarageService>,
    pub appointment_service: Arc<AppointmentService>,
    pub db_pool: PgPool,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(auth::configure)
            .configure(vehicles::configure)
            .configure(garages::configure)
            .configure(appointments::configure),
    )
    .route("/health", web::get().to(health))
    .route("/ready", web::get().to(ready));
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check passed")
    ),
    tag = "health"
)]
pub async fn health() -> &'static str {
    "ok"
}

#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Readiness check passed"),
        (status = 503, description = "Service not ready"),
    ),
    tag = "health"
)]
pub async fn ready(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
        .map_err(|e| AppError::ServiceUnavailable {
            service: "database".to_string(),
            message: format!("Service not ready: {e}"),
        })?;
    Ok(HttpResponse::Ok().body("ready"))
}
