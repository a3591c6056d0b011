pub mod appointment_dto;
pub mod auth_dto;
pub mod common;
pub mod garage_dto;
pub mod vehicle_dto;

pub use appointment_dto::{
    AppointmentResponse, CreateAppointmentRequest, UpdateAppointmentRequest,
};
pub use auth_dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use common::ErrorResponse;
pub use garage_dto::{GarageResponse, NearbyGaragesQuery, SlotsQuery};
pub use vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
