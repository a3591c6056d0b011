//! Great-circle proximity queries over the garage list.
//!
//! All distances in this crate are kilometers.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Garage};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Rejects non-finite and out-of-range coordinates so that a garbage
    /// input surfaces as a validation failure rather than a zero distance.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::ValidationError(format!(
                "latitude {latitude} is not a valid coordinate"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::ValidationError(format!(
                "longitude {longitude} is not a valid coordinate"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Haversine distance between two points, in kilometers.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NearbyOrder {
    #[default]
    Unordered,
    ClosestFirst,
}

/// Garages within `radius_km` of `origin`.
///
/// Linear scan; fine at the tens-to-hundreds of garages this system carries.
/// Past that a spatial index (grid or R-tree) would be the next step.
pub fn garages_within_radius(
    origin: GeoPoint,
    radius_km: f64,
    garages: Vec<Garage>,
    order: NearbyOrder,
) -> Vec<Garage> {
    let mut hits: Vec<(f64, Garage)> = garages
        .into_iter()
        .filter_map(|garage| {
            let distance = distance_km(origin, garage.position());
            (distance <= radius_km).then_some((distance, garage))
        })
        .collect();

    if order == NearbyOrder::ClosestFirst {
        hits.sort_by(|left, right| left.0.total_cmp(&right.0));
    }

    hits.into_iter().map(|(_, garage)| garage).collect()
}
