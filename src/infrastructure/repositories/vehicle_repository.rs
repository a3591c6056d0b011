use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::traits::VehicleRepository;
use crate::domain::Vehicle;
use crate::error::AppResult;

const VEHICLE_COLUMNS: &str = "id, user_id, make, model, year, license_plate, vin, fuel_type, \
                               is_primary, status, next_service_mileage, created_at";

pub struct VehicleRepositoryImpl {
    pool: PgPool,
}

impl VehicleRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleRepository for VehicleRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM vehicles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(vehicle)
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM vehicles WHERE user_id = $1 ORDER BY created_at"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(vehicles)
    }

    async fn create(&self, vehicle: &Vehicle) -> AppResult<Vehicle> {
        let mut tx = self.pool.begin().await?;

        if vehicle.is_primary {
            demote_other_primaries(&mut tx, vehicle.user_id, vehicle.id).await?;
        }

        let created = sqlx::query_as::<_, Vehicle>(&format!(
            r#"
            INSERT INTO vehicles
                (id, user_id, make, model, year, license_plate, vin, fuel_type,
                 is_primary, status, next_service_mileage, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {VEHICLE_COLUMNS}
            "#
        ))
        .bind(vehicle.id)
        .bind(vehicle.user_id)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(&vehicle.license_plate)
        .bind(&vehicle.vin)
        .bind(&vehicle.fuel_type)
        .bind(vehicle.is_primary)
        .bind(&vehicle.status)
        .bind(vehicle.next_service_mileage)
        .bind(vehicle.created_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    async fn update(&self, vehicle: &Vehicle) -> AppResult<Vehicle> {
        let mut tx = self.pool.begin().await?;

        if vehicle.is_primary {
            demote_other_primaries(&mut tx, vehicle.user_id, vehicle.id).await?;
        }

        let updated = sqlx::query_as::<_, Vehicle>(&format!(
            r#"
            UPDATE vehicles
            SET make = $2, model = $3, year = $4, license_plate = $5, vin = $6,
                fuel_type = $7, is_primary = $8, status = $9, next_service_mileage = $10
            WHERE id = $1
            RETURNING {VEHICLE_COLUMNS}
            "#
        ))
        .bind(vehicle.id)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(&vehicle.license_plate)
        .bind(&vehicle.vin)
        .bind(&vehicle.fuel_type)
        .bind(vehicle.is_primary)
        .bind(&vehicle.status)
        .bind(vehicle.next_service_mileage)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

/// Single statement so the one-primary-per-user invariant never depends on
/// reading rows back first.
async fn demote_other_primaries(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    user_id: Uuid,
    keep_id: Uuid,
) -> AppResult<()> {
    sqlx::query("UPDATE vehicles SET is_primary = FALSE WHERE user_id = $1 AND id <> $2 AND is_primary")
        .bind(user_id)
        .bind(keep_id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
