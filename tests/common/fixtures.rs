#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use motorcare_backend::config::AuthConfig;
use motorcare_backend::domain::{Appointment, Garage, Role, User, Vehicle};
use uuid::Uuid;

// Counter for generating unique test values
static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn next_id() -> u64 {
    TEST_COUNTER.fetch_add(1, Ordering::SeqCst)
}

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "test-secret-that-is-long-enough".to_string(),
        jwt_expiration_seconds: 3600,
        issuer: "motorcare-backend".to_string(),
        audience: "motorcare-clients".to_string(),
    }
}

pub fn test_user() -> User {
    let id = next_id();
    User {
        id: Uuid::new_v4(),
        username: format!("testuser{}", id),
        email: format!("test{}@example.com", id),
        full_name: format!("Test User {}", id),
        phone_number: None,
        role: Role::Customer,
        password_hash: "hashed_password".to_string(),
        created_at: Utc::now(),
    }
}

pub fn test_vehicle(user_id: Uuid) -> Vehicle {
    let id = next_id();
    Vehicle {
        id: Uuid::new_v4(),
        user_id,
        make: "Renault".to_string(),
        model: "Clio".to_string(),
        year: 2021,
        license_plate: format!("123 TU {}", id),
        vin: format!("VF1RJA00{:09}", id),
        fuel_type: "petrol".to_string(),
        is_primary: false,
        status: "active".to_string(),
        next_service_mileage: Some(60_000),
        created_at: Utc::now(),
    }
}

/// Garage in central Tunis with the default opening hours.
pub fn test_garage() -> Garage {
    test_garage_at("Service Tunis Centre", 36.8065, 10.1815)
}

pub fn test_garage_at(name: &str, latitude: f64, longitude: f64) -> Garage {
    Garage {
        id: Uuid::new_v4(),
        name: name.to_string(),
        address: "Avenue Habib Bourguiba, Tunis".to_string(),
        latitude,
        longitude,
        rating: Some(4.5),
        review_count: Some(87),
        opening_hour: 8,
        closing_hour: 18,
        is_open: true,
        phone_number: "+216 71 000 000".to_string(),
        services: vec![
            "maintenance".to_string(),
            "oil-change".to_string(),
            "brake-service".to_string(),
        ],
        created_at: Utc::now(),
    }
}

pub fn test_appointment(user_id: Uuid, vehicle_id: Uuid, garage_id: Uuid) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        user_id,
        vehicle_id,
        garage_id,
        service_type: "maintenance".to_string(),
        date: Utc::now() + chrono::Duration::days(3),
        status: "scheduled".to_string(),
        price: None,
        notes: None,
        payment_method: "cash".to_string(),
        payment_status: "pending".to_string(),
        transaction_id: None,
        created_at: Utc::now(),
    }
}
