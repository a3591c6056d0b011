pub mod appointment_repository;
pub mod garage_repository;
pub mod traits;
pub mod user_repository;
pub mod vehicle_repository;

pub use appointment_repository::AppointmentRepositoryImpl;
pub use garage_repository::GarageRepositoryImpl;
pub use traits::{
    AppointmentRepository, GarageRepository, UserRepository, VehicleRepository,
};
pub use user_repository::UserRepositoryImpl;
pub use vehicle_repository::VehicleRepositoryImpl;
