use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const APPOINTMENT_STATUSES: &[&str] = &["scheduled", "urgent", "completed", "cancelled"];
pub const PAYMENT_METHODS: &[&str] = &["cash", "card", "transfer", "later"];
pub const PAYMENT_STATUSES: &[&str] = &["pending", "completed", "failed"];

/// How far ahead an appointment may be booked, in days.
pub const BOOKING_HORIZON_DAYS: i64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub garage_id: Uuid,
    pub service_type: String,
    pub date: DateTime<Utc>,
    pub status: String,
    pub price: Option<Decimal>,
    pub notes: Option<String>,
    pub payment_method: String,
    pub payment_status: String,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
