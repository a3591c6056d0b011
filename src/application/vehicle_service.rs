use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::domain::Vehicle;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::VehicleRepository;

#[derive(Clone)]
pub struct VehicleService {
    vehicle_repo: Arc<dyn VehicleRepository>,
}

impl VehicleService {
    pub fn new(vehicle_repo: Arc<dyn VehicleRepository>) -> Self {
        Self { vehicle_repo }
    }

    pub async fn list(&self, user_id: Uuid) -> AppResult<Vec<VehicleResponse>> {
        let vehicles = self.vehicle_repo.find_by_user(user_id).await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateVehicleRequest,
    ) -> AppResult<VehicleResponse> {
        request.validate()?;

        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            user_id,
            make: request.make,
            model: request.model,
            year: request.year,
            license_plate: request.license_plate,
            vin: request.vin,
            fuel_type: request.fuel_type,
            is_primary: request.is_primary,
            status: request.status.unwrap_or_else(|| "active".to_string()),
            next_service_mileage: request.next_service_mileage,
            created_at: Utc::now(),
        };

        let created = self.vehicle_repo.create(&vehicle).await?;
        Ok(created.into())
    }

    pub async fn update(
        &self,
        actor_user_id: Uuid,
        vehicle_id: Uuid,
        request: UpdateVehicleRequest,
    ) -> AppResult<VehicleResponse> {
        request.validate()?;

        let mut vehicle = self.owned_vehicle(actor_user_id, vehicle_id).await?;

        if let Some(make) = request.make {
            vehicle.make = make;
        }
        if let Some(model) = request.model {
            vehicle.model = model;
        }
        if let Some(year) = request.year {
            vehicle.year = year;
        }
        if let Some(license_plate) = request.license_plate {
            vehicle.license_plate = license_plate;
        }
        if let Some(vin) = request.vin {
            vehicle.vin = vin;
        }
        if let Some(fuel_type) = request.fuel_type {
            vehicle.fuel_type = fuel_type;
        }
        if let Some(is_primary) = request.is_primary {
            vehicle.is_primary = is_primary;
        }
        if let Some(status) = request.status {
            vehicle.status = status;
        }
        if let Some(mileage) = request.next_service_mileage {
            vehicle.next_service_mileage = Some(mileage);
        }

        let updated = self.vehicle_repo.update(&vehicle).await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, actor_user_id: Uuid, vehicle_id: Uuid) -> AppResult<()> {
        self.owned_vehicle(actor_user_id, vehicle_id).await?;
        self.vehicle_repo.delete(vehicle_id).await
    }

    async fn owned_vehicle(&self, actor_user_id: Uuid, vehicle_id: Uuid) -> AppResult<Vehicle> {
        let vehicle = self
            .vehicle_repo
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("vehicle not found".to_string()))?;

        if vehicle.user_id != actor_user_id {
            return Err(AppError::Forbidden("Not authorized".to_string()));
        }
        Ok(vehicle)
    }
}
