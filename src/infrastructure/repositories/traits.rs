use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Appointment, Garage, User, Vehicle};
use crate::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn create(&self, user: &User) -> AppResult<User>;
}

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vehicle>>;
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Vehicle>>;

    /// Persists the vehicle. When `is_primary` is set, any previous primary
    /// vehicle of the same user is demoted inside the same transaction.
    async fn create(&self, vehicle: &Vehicle) -> AppResult<Vehicle>;
    async fn update(&self, vehicle: &Vehicle) -> AppResult<Vehicle>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

#[async_trait]
pub trait GarageRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Garage>>;
    async fn find_all(&self) -> AppResult<Vec<Garage>>;
    async fn find_by_service(&self, service: &str) -> AppResult<Vec<Garage>>;
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Appointment>>;
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Appointment>>;
    async fn create(&self, appointment: &Appointment) -> AppResult<Appointment>;
    async fn update(&self, appointment: &Appointment) -> AppResult<Appointment>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}
