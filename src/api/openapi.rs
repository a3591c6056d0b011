use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth endpoints
        crate::api::routes::auth::register,
        crate::api::routes::auth::login,
        crate::api::routes::auth::me,
        // Vehicle endpoints
        crate::api::routes::vehicles::list_vehicles,
        crate::api::routes::vehicles::create_vehicle,
        crate::api::routes::vehicles::update_vehicle,
        crate::api::routes::vehicles::delete_vehicle,
        // Garage endpoints
        crate::api::routes::garages::list_garages,
        crate::api::routes::garages::nearby_garages,
        crate::api::routes::garages::garages_by_service,
        crate::api::routes::garages::get_garage,
        crate::api::routes::garages::garage_services,
        crate::api::routes::garages::garage_slots,
        // Appointment endpoints
        crate::api::routes::appointments::list_appointments,
        crate::api::routes::appointments::create_appointment,
        crate::api::routes::appointments::update_appointment,
        crate::api::routes::appointments::delete_appointment,
        // Health checks
        crate::api::routes::health,
        crate::api::routes::ready,
    ),
    components(
        schemas(
            crate::api::dtos::auth_dto::RegisterRequest,
            crate::api::dtos::auth_dto::LoginRequest,
            crate::api::dtos::auth_dto::AuthResponse,
            crate::api::dtos::auth_dto::UserResponse,
            crate::api::dtos::vehicle_dto::CreateVehicleRequest,
            crate::api::dtos::vehicle_dto::UpdateVehicleRequest,
            crate::api::dtos::vehicle_dto::VehicleResponse,
            crate::api::dtos::garage_dto::GarageResponse,
            crate::api::dtos::appointment_dto::CreateAppointmentRequest,
            crate::api::dtos::appointment_dto::UpdateAppointmentRequest,
            crate::api::dtos::appointment_dto::AppointmentResponse,
            crate::api::dtos::common::ErrorResponse,
            crate::domain::slots::TimeSlot,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and session info"),
        (name = "vehicles", description = "Vehicles owned by the authenticated user"),
        (name = "garages", description = "Garage discovery, services and booking slots"),
        (name = "appointments", description = "Service appointment booking"),
        (name = "health", description = "Health check endpoints"),
    ),
    info(
        title = "MotorCare API",
        version = "0.1.0",
        description = "Vehicle service booking backend API",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn configure_swagger_ui(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
