use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{
    AppointmentResponse, CreateAppointmentRequest, UpdateAppointmentRequest,
};
use crate::domain::appointment::{
    APPOINTMENT_STATUSES, BOOKING_HORIZON_DAYS, PAYMENT_METHODS, PAYMENT_STATUSES,
};
use crate::domain::Appointment;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::{
    AppointmentRepository, GarageRepository, VehicleRepository,
};

#[derive(Clone)]
pub struct AppointmentService {
    appointment_repo: Arc<dyn AppointmentRepository>,
    vehicle_repo: Arc<dyn VehicleRepository>,
    garage_repo: Arc<dyn GarageRepository>,
}

impl AppointmentService {
    pub fn new(
        appointment_repo: Arc<dyn AppointmentRepository>,
        vehicle_repo: Arc<dyn VehicleRepository>,
        garage_repo: Arc<dyn GarageRepository>,
    ) -> Self {
        Self {
            appointment_repo,
            vehicle_repo,
            garage_repo,
        }
    }

    pub async fn list(&self, user_id: Uuid) -> AppResult<Vec<AppointmentResponse>> {
        let appointments = self.appointment_repo.find_by_user(user_id).await?;
        Ok(appointments
            .into_iter()
            .map(AppointmentResponse::from)
            .collect())
    }

    /// Books an appointment for the authenticated user. The user id comes
    /// from the token, never from the payload. Two users may still book the
    /// same garage and time; rejecting that is pending a product decision.
    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateAppointmentRequest,
        now: DateTime<Utc>,
    ) -> AppResult<AppointmentResponse> {
        request.validate()?;
        check_booking_date(request.date, now)?;

        let status = request.status.unwrap_or_else(|| "scheduled".to_string());
        let payment_method = request.payment_method.unwrap_or_else(|| "cash".to_string());
        let payment_status = request
            .payment_status
            .unwrap_or_else(|| "pending".to_string());
        check_allowed("status", &status, APPOINTMENT_STATUSES)?;
        check_allowed("paymentMethod", &payment_method, PAYMENT_METHODS)?;
        check_allowed("paymentStatus", &payment_status, PAYMENT_STATUSES)?;

        if self
            .garage_repo
            .find_by_id(request.garage_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("garage not found".to_string()));
        }

        let vehicle = self
            .vehicle_repo
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("vehicle not found".to_string()))?;
        if vehicle.user_id != user_id {
            return Err(AppError::Forbidden("Not authorized".to_string()));
        }

        let appointment = Appointment {
            id: Uuid::new_v4(),
            user_id,
            vehicle_id: request.vehicle_id,
            garage_id: request.garage_id,
            service_type: request.service_type,
            date: request.date,
            status,
            price: request.price,
            notes: request.notes,
            payment_method,
            payment_status,
            transaction_id: None,
            created_at: now,
        };

        let created = self.appointment_repo.create(&appointment).await?;
        Ok(created.into())
    }

    pub async fn update(
        &self,
        actor_user_id: Uuid,
        appointment_id: Uuid,
        request: UpdateAppointmentRequest,
        now: DateTime<Utc>,
    ) -> AppResult<AppointmentResponse> {
        request.validate()?;

        let mut appointment = self.owned_appointment(actor_user_id, appointment_id).await?;

        if let Some(service_type) = request.service_type {
            appointment.service_type = service_type;
        }
        if let Some(date) = request.date {
            check_booking_date(date, now)?;
            appointment.date = date;
        }
        if let Some(status) = request.status {
            check_allowed("status", &status, APPOINTMENT_STATUSES)?;
            appointment.status = status;
        }
        if let Some(notes) = request.notes {
            appointment.notes = Some(notes);
        }
        if let Some(payment_method) = request.payment_method {
            check_allowed("paymentMethod", &payment_method, PAYMENT_METHODS)?;
            appointment.payment_method = payment_method;
        }
        if let Some(payment_status) = request.payment_status {
            check_allowed("paymentStatus", &payment_status, PAYMENT_STATUSES)?;
            appointment.payment_status = payment_status;
        }
        if let Some(price) = request.price {
            appointment.price = Some(price);
        }
        if let Some(transaction_id) = request.transaction_id {
            appointment.transaction_id = Some(transaction_id);
        }

        let updated = self.appointment_repo.update(&appointment).await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, actor_user_id: Uuid, appointment_id: Uuid) -> AppResult<()> {
        self.owned_appointment(actor_user_id, appointment_id)
            .await?;
        self.appointment_repo.delete(appointment_id).await
    }

    async fn owned_appointment(
        &self,
        actor_user_id: Uuid,
        appointment_id: Uuid,
    ) -> AppResult<Appointment> {
        let appointment = self
            .appointment_repo
            .find_by_id(appointment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("appointment not found".to_string()))?;

        if appointment.user_id != actor_user_id {
            return Err(AppError::Forbidden("Not authorized".to_string()));
        }
        Ok(appointment)
    }
}

fn check_booking_date(date: DateTime<Utc>, now: DateTime<Utc>) -> AppResult<()> {
    if date <= now {
        return Err(AppError::validation_error(
            "Appointment must be in the future",
        ));
    }
    if date > now + Duration::days(BOOKING_HORIZON_DAYS) {
        return Err(AppError::validation_error(format!(
            "cannot book more than {BOOKING_HORIZON_DAYS} days ahead"
        )));
    }
    Ok(())
}

fn check_allowed(field: &str, value: &str, allowed: &[&str]) -> AppResult<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(AppError::validation_error(format!(
            "{field} must be one of: {}",
            allowed.join(", ")
        )))
    }
}
