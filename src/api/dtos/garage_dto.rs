use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Garage, NearbyOrder};

/// Query string for `GET /garages/nearby`. Radius is kilometers; a missing
/// radius falls back to 10 km as the original client expects.
#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct NearbyGaragesQuery {
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be within -90..90"))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "longitude must be within -180..180"))]
    pub lng: f64,

    #[serde(default = "default_radius_km")]
    #[validate(range(
        exclusive_min = 0.0,
        max = 20000.0,
        message = "radius must be a positive number of kilometers"
    ))]
    pub radius: f64,

    /// `sort=distance` returns nearest garages first.
    pub sort: Option<String>,
}

impl NearbyGaragesQuery {
    pub fn order(&self) -> NearbyOrder {
        match self.sort.as_deref() {
            Some("distance") => NearbyOrder::ClosestFirst,
            _ => NearbyOrder::Unordered,
        }
    }
}

const fn default_radius_km() -> f64 {
    10.0
}

/// Query string for `GET /garages/{id}/slots`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SlotsQuery {
    /// Calendar day to book on, `YYYY-MM-DD`.
    pub date: NaiveDate,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GarageResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: Option<f64>,
    pub review_count: Option<i32>,
    pub opening_hour: i32,
    pub closing_hour: i32,
    pub is_open: bool,
    pub phone_number: String,
    pub services: Vec<String>,
}

impl From<Garage> for GarageResponse {
    fn from(garage: Garage) -> Self {
        Self {
            id: garage.id,
            name: garage.name,
            address: garage.address,
            latitude: garage.latitude,
            longitude: garage.longitude,
            rating: garage.rating,
            review_count: garage.review_count,
            opening_hour: garage.opening_hour,
            closing_hour: garage.closing_hour,
            is_open: garage.is_open,
            phone_number: garage.phone_number,
            services: garage.services,
        }
    }
}
