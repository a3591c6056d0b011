use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::Vehicle;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1950, max = 2100, message = "Year is out of range"))]
    pub year: i32,

    #[validate(length(min = 1, max = 20))]
    pub license_plate: String,

    #[validate(length(min = 11, max = 17, message = "VIN must be 11-17 characters"))]
    pub vin: String,

    #[validate(length(min = 1, max = 32))]
    pub fuel_type: String,

    #[serde(default)]
    pub is_primary: bool,

    pub status: Option<String>,
    pub next_service_mileage: Option<i32>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub make: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,
    #[validate(range(min = 1950, max = 2100, message = "Year is out of range"))]
    pub year: Option<i32>,
    #[validate(length(min = 1, max = 20))]
    pub license_plate: Option<String>,
    #[validate(length(min = 11, max = 17, message = "VIN must be 11-17 characters"))]
    pub vin: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub fuel_type: Option<String>,
    pub is_primary: Option<bool>,
    pub status: Option<String>,
    pub next_service_mileage: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub vin: String,
    pub fuel_type: String,
    pub is_primary: bool,
    pub status: String,
    pub next_service_mileage: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            user_id: vehicle.user_id,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            license_plate: vehicle.license_plate,
            vin: vehicle.vin,
            fuel_type: vehicle.fuel_type,
            is_primary: vehicle.is_primary,
            status: vehicle.status,
            next_service_mileage: vehicle.next_service_mileage,
            created_at: vehicle.created_at,
        }
    }
}
