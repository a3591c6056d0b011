use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::Appointment;

/// Body for `POST /appointments`. The `date` already combines the chosen
/// calendar day with the selected time slot; the authenticated user id is
/// taken from the token, never from this payload.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub garage_id: Uuid,
    pub vehicle_id: Uuid,

    #[validate(length(min = 1, message = "Please select a service type"))]
    pub service_type: String,

    pub date: DateTime<Utc>,

    pub status: Option<String>,
    pub notes: Option<String>,
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    #[validate(length(min = 1))]
    pub service_type: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
    pub transaction_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub garage_id: Uuid,
    pub service_type: String,
    pub date: DateTime<Utc>,
    pub status: String,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
    pub notes: Option<String>,
    pub payment_method: String,
    pub payment_status: String,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            user_id: appointment.user_id,
            vehicle_id: appointment.vehicle_id,
            garage_id: appointment.garage_id,
            service_type: appointment.service_type,
            date: appointment.date,
            status: appointment.status,
            price: appointment.price,
            notes: appointment.notes,
            payment_method: appointment.payment_method,
            payment_status: appointment.payment_status,
            transaction_id: appointment.transaction_id,
            created_at: appointment.created_at,
        }
    }
}
