use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::geo::GeoPoint;
use crate::domain::slots::BusinessWindow;
use crate::domain::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Garage {
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
    pub created_at: DateTime<Utc>,
}

impl Garage {
    /// Stored coordinates are checked on insert, so this does not re-validate.
    pub fn position(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    pub fn business_window(&self) -> Result<BusinessWindow, DomainError> {
        BusinessWindow::new(self.opening_hour as u32, self.closing_hour as u32)
    }
}

/// Service types offered by the selected garage. A form with no garage
/// selected has no valid service choices yet.
pub fn services_for_selection(garage: Option<&Garage>) -> Vec<String> {
    garage.map(|g| g.services.clone()).unwrap_or_default()
}
