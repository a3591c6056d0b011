use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::traits::GarageRepository;
use crate::domain::Garage;
use crate::error::AppResult;

const GARAGE_COLUMNS: &str = "id, name, address, latitude, longitude, rating, review_count, \
                              opening_hour, closing_hour, is_open, phone_number, services, \
                              created_at";

pub struct GarageRepositoryImpl {
    pool: PgPool,
}

impl GarageRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GarageRepository for GarageRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Garage>> {
        let garage = sqlx::query_as::<_, Garage>(&format!(
            "SELECT {GARAGE_COLUMNS} FROM garages WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(garage)
    }

    async fn find_all(&self) -> AppResult<Vec<Garage>> {
        let garages = sqlx::query_as::<_, Garage>(&format!(
            "SELECT {GARAGE_COLUMNS} FROM garages ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(garages)
    }

    async fn find_by_service(&self, service: &str) -> AppResult<Vec<Garage>> {
        let garages = sqlx::query_as::<_, Garage>(&format!(
            "SELECT {GARAGE_COLUMNS} FROM garages WHERE $1 = ANY(services) ORDER BY name"
        ))
        .bind(service)
        .fetch_all(&self.pool)
        .await?;
        Ok(garages)
    }
}
