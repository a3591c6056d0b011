use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{GarageResponse, NearbyGaragesQuery};
use crate::domain::appointment::BOOKING_HORIZON_DAYS;
use crate::domain::garage::services_for_selection;
use crate::domain::geo::{garages_within_radius, GeoPoint};
use crate::domain::slots::available_slots;
use crate::domain::{Garage, TimeSlot};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::GarageRepository;

#[derive(Clone)]
pub struct GarageService {
    garage_repo: Arc<dyn GarageRepository>,
}

impl GarageService {
    pub fn new(garage_repo: Arc<dyn GarageRepository>) -> Self {
        Self { garage_repo }
    }

    pub async fn list(&self) -> AppResult<Vec<GarageResponse>> {
        let garages = self.garage_repo.find_all().await?;
        Ok(garages.into_iter().map(GarageResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<GarageResponse> {
        Ok(self.garage(id).await?.into())
    }

    /// Garages within `query.radius` kilometers of the caller's position.
    pub async fn nearby(&self, query: NearbyGaragesQuery) -> AppResult<Vec<GarageResponse>> {
        query.validate()?;
        let origin = GeoPoint::new(query.lat, query.lng)?;

        let garages = self.garage_repo.find_all().await?;
        let hits = garages_within_radius(origin, query.radius, garages, query.order());
        Ok(hits.into_iter().map(GarageResponse::from).collect())
    }

    pub async fn by_service(&self, service: &str) -> AppResult<Vec<GarageResponse>> {
        let garages = self.garage_repo.find_by_service(service).await?;
        Ok(garages.into_iter().map(GarageResponse::from).collect())
    }

    /// Service types a user may choose for a garage; an unselected garage
    /// yields an empty menu.
    pub async fn service_menu(&self, garage_id: Option<Uuid>) -> AppResult<Vec<String>> {
        match garage_id {
            None => Ok(services_for_selection(None)),
            Some(id) => {
                let garage = self.garage(id).await?;
                Ok(services_for_selection(Some(&garage)))
            }
        }
    }

    /// Bookable slots at a garage on `date`, bounded by the garage's own
    /// opening hours. Dates outside today..today+30 are rejected here; the
    /// slot generator itself does not know about the horizon.
    pub async fn day_slots(
        &self,
        garage_id: Uuid,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<TimeSlot>> {
        let today = now.date_naive();
        if date < today {
            return Err(AppError::validation_error(
                "cannot book a date in the past",
            ));
        }
        if date > today + Duration::days(BOOKING_HORIZON_DAYS) {
            return Err(AppError::validation_error(format!(
                "cannot book more than {BOOKING_HORIZON_DAYS} days ahead"
            )));
        }

        let garage = self.garage(garage_id).await?;
        let window = garage.business_window()?;
        Ok(available_slots(date, now.naive_utc(), window))
    }

    async fn garage(&self, id: Uuid) -> AppResult<Garage> {
        self.garage_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("garage not found".to_string()))
    }
}
