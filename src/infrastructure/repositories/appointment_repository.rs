use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::traits::AppointmentRepository;
use crate::domain::Appointment;
use crate::error::AppResult;

const APPOINTMENT_COLUMNS: &str = "id, user_id, vehicle_id, garage_id, service_type, date, \
                                   status, price, notes, payment_method, payment_status, \
                                   transaction_id, created_at";

pub struct AppointmentRepositoryImpl {
    pool: PgPool,
}

impl AppointmentRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for AppointmentRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Appointment>> {
        let appointment = sqlx::query_as::<_, Appointment>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(appointment)
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Appointment>> {
        let appointments = sqlx::query_as::<_, Appointment>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE user_id = $1 ORDER BY date"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(appointments)
    }

    async fn create(&self, appointment: &Appointment) -> AppResult<Appointment> {
        let created = sqlx::query_as::<_, Appointment>(&format!(
            r#"
            INSERT INTO appointments
                (id, user_id, vehicle_id, garage_id, service_type, date, status,
                 price, notes, payment_method, payment_status, transaction_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {APPOINTMENT_COLUMNS}
            "#
        ))
        .bind(appointment.id)
        .bind(appointment.user_id)
        .bind(appointment.vehicle_id)
        .bind(appointment.garage_id)
        .bind(&appointment.service_type)
        .bind(appointment.date)
        .bind(&appointment.status)
        .bind(appointment.price)
        .bind(&appointment.notes)
        .bind(&appointment.payment_method)
        .bind(&appointment.payment_status)
        .bind(&appointment.transaction_id)
        .bind(appointment.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update(&self, appointment: &Appointment) -> AppResult<Appointment> {
        let updated = sqlx::query_as::<_, Appointment>(&format!(
            r#"
            UPDATE appointments
            SET service_type = $2, date = $3, status = $4, price = $5, notes = $6,
                payment_method = $7, payment_status = $8, transaction_id = $9
            WHERE id = $1
            RETURNING {APPOINTMENT_COLUMNS}
            "#
        ))
        .bind(appointment.id)
        .bind(&appointment.service_type)
        .bind(appointment.date)
        .bind(&appointment.status)
        .bind(appointment.price)
        .bind(&appointment.notes)
        .bind(&appointment.payment_method)
        .bind(&appointment.payment_status)
        .bind(&appointment.transaction_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
