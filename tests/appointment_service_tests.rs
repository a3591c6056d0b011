use std::sync::Arc;

mod common;

use crate::common::fixtures::{test_appointment, test_garage, test_vehicle};
use crate::common::mocks::{MockAppointmentRepo, MockGarageRepo, MockVehicleRepo};
use actix_rt::test;
use chrono::{DateTime, Duration, TimeZone, Utc};
use motorcare_backend::api::dtos::{CreateAppointmentRequest, UpdateAppointmentRequest};
use motorcare_backend::application::AppointmentService;
use motorcare_backend::error::AppError;
use uuid::Uuid;

struct Setup {
    appointment_repo: Arc<MockAppointmentRepo>,
    vehicle_repo: Arc<MockVehicleRepo>,
    garage_repo: Arc<MockGarageRepo>,
    service: AppointmentService,
}

fn setup() -> Setup {
    let appointment_repo = Arc::new(MockAppointmentRepo::default());
    let vehicle_repo = Arc::new(MockVehicleRepo::default());
    let garage_repo = Arc::new(MockGarageRepo::default());
    let service = AppointmentService::new(
        appointment_repo.clone(),
        vehicle_repo.clone(),
        garage_repo.clone(),
    );
    Setup {
        appointment_repo,
        vehicle_repo,
        garage_repo,
        service,
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 10, 9, 0, 0).unwrap()
}

fn create_request(garage_id: Uuid, vehicle_id: Uuid, date: DateTime<Utc>) -> CreateAppointmentRequest {
    serde_json::from_value(serde_json::json!({
        "garageId": garage_id,
        "vehicleId": vehicle_id,
        "serviceType": "maintenance",
        "date": date.to_rfc3339()
    }))
    .expect("should deserialize")
}

#[test]
async fn create_books_for_the_authenticated_user() {
    let ctx = setup();
    let user_id = Uuid::new_v4();
    let garage = test_garage();
    let vehicle = test_vehicle(user_id);
    ctx.garage_repo.push(garage.clone());
    ctx.vehicle_repo.push(vehicle.clone());

    let booked = ctx
        .service
        .create(
            user_id,
            create_request(garage.id, vehicle.id, now() + Duration::days(2)),
            now(),
        )
        .await
        .expect("booking should succeed");

    assert_eq!(booked.user_id, user_id);
    assert_eq!(booked.status, "scheduled");
    assert_eq!(booked.payment_method, "cash");
    assert_eq!(booked.payment_status, "pending");

    let stored = ctx
        .appointment_repo
        .appointments
        .lock()
        .expect("appointments mutex poisoned");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].user_id, user_id);
}

#[test]
async fn create_rejects_a_date_in_the_past() {
    let ctx = setup();
    let user_id = Uuid::new_v4();
    let garage = test_garage();
    let vehicle = test_vehicle(user_id);
    ctx.garage_repo.push(garage.clone());
    ctx.vehicle_repo.push(vehicle.clone());

    let result = ctx
        .service
        .create(
            user_id,
            create_request(garage.id, vehicle.id, now() - Duration::hours(1)),
            now(),
        )
        .await;

    assert!(matches!(result, Err(AppError::ValidationError { .. })));
}

#[test]
async fn create_rejects_a_date_beyond_the_booking_horizon() {
    let ctx = setup();
    let user_id = Uuid::new_v4();
    let garage = test_garage();
    let vehicle = test_vehicle(user_id);
    ctx.garage_repo.push(garage.clone());
    ctx.vehicle_repo.push(vehicle.clone());

    let result = ctx
        .service
        .create(
            user_id,
            create_request(garage.id, vehicle.id, now() + Duration::days(45)),
            now(),
        )
        .await;

    assert!(matches!(result, Err(AppError::ValidationError { .. })));
}

#[test]
async fn create_rejects_an_unknown_garage() {
    let ctx = setup();
    let user_id = Uuid::new_v4();
    let vehicle = test_vehicle(user_id);
    ctx.vehicle_repo.push(vehicle.clone());

    let result = ctx
        .service
        .create(
            user_id,
            create_request(Uuid::new_v4(), vehicle.id, now() + Duration::days(2)),
            now(),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[test]
async fn create_rejects_a_vehicle_of_another_user() {
    let ctx = setup();
    let garage = test_garage();
    let other_vehicle = test_vehicle(Uuid::new_v4());
    ctx.garage_repo.push(garage.clone());
    ctx.vehicle_repo.push(other_vehicle.clone());

    let result = ctx
        .service
        .create(
            Uuid::new_v4(),
            create_request(garage.id, other_vehicle.id, now() + Duration::days(2)),
            now(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
}

#[test]
async fn create_rejects_an_unknown_payment_method() {
    let ctx = setup();
    let user_id = Uuid::new_v4();
    let garage = test_garage();
    let vehicle = test_vehicle(user_id);
    ctx.garage_repo.push(garage.clone());
    ctx.vehicle_repo.push(vehicle.clone());

    let mut request = create_request(garage.id, vehicle.id, now() + Duration::days(2));
    request.payment_method = Some("cheque".to_string());
    let result = ctx.service.create(user_id, request, now()).await;

    assert!(matches!(result, Err(AppError::ValidationError { .. })));
}

#[test]
async fn list_only_returns_the_callers_appointments() {
    let ctx = setup();
    let user_id = Uuid::new_v4();
    ctx.appointment_repo
        .push(test_appointment(user_id, Uuid::new_v4(), Uuid::new_v4()));
    ctx.appointment_repo
        .push(test_appointment(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()));

    let appointments = ctx.service.list(user_id).await.expect("list should succeed");

    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].user_id, user_id);
}

#[test]
async fn update_rejects_an_appointment_of_another_user() {
    let ctx = setup();
    let appointment = test_appointment(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    ctx.appointment_repo.push(appointment.clone());

    let result = ctx
        .service
        .update(
            Uuid::new_v4(),
            appointment.id,
            UpdateAppointmentRequest {
                status: Some("cancelled".to_string()),
                ..Default::default()
            },
            now(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
}

#[test]
async fn update_rejects_an_invalid_status() {
    let ctx = setup();
    let user_id = Uuid::new_v4();
    let appointment = test_appointment(user_id, Uuid::new_v4(), Uuid::new_v4());
    ctx.appointment_repo.push(appointment.clone());

    let result = ctx
        .service
        .update(
            user_id,
            appointment.id,
            UpdateAppointmentRequest {
                status: Some("postponed".to_string()),
                ..Default::default()
            },
            now(),
        )
        .await;

    assert!(matches!(result, Err(AppError::ValidationError { .. })));
}

#[test]
async fn update_reschedules_within_the_booking_horizon() {
    let ctx = setup();
    let user_id = Uuid::new_v4();
    let appointment = test_appointment(user_id, Uuid::new_v4(), Uuid::new_v4());
    ctx.appointment_repo.push(appointment.clone());

    let new_date = now() + Duration::days(10);
    let updated = ctx
        .service
        .update(
            user_id,
            appointment.id,
            UpdateAppointmentRequest {
                date: Some(new_date),
                ..Default::default()
            },
            now(),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.date, new_date);
}

#[test]
async fn delete_rejects_an_unknown_appointment() {
    let ctx = setup();

    let result = ctx.service.delete(Uuid::new_v4(), Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[test]
async fn delete_removes_an_owned_appointment() {
    let ctx = setup();
    let user_id = Uuid::new_v4();
    let appointment = test_appointment(user_id, Uuid::new_v4(), Uuid::new_v4());
    ctx.appointment_repo.push(appointment.clone());

    ctx.service
        .delete(user_id, appointment.id)
        .await
        .expect("delete should succeed");

    assert!(ctx
        .appointment_repo
        .appointments
        .lock()
        .expect("appointments mutex poisoned")
        .is_empty());
}
