pub mod appointment_service;
pub mod auth_service;
pub mod garage_service;
pub mod vehicle_service;

pub use appointment_service::AppointmentService;
pub use auth_service::AuthService;
pub use garage_service::GarageService;
pub use vehicle_service::VehicleService;
