#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use motorcare_backend::domain::{Appointment, Garage, User, Vehicle};
use motorcare_backend::error::AppResult;
use motorcare_backend::infrastructure::repositories::{
    AppointmentRepository, GarageRepository, UserRepository, VehicleRepository,
};
use uuid::Uuid;

#[derive(Default)]
pub struct MockUserRepo {
    pub users: Mutex<Vec<User>>,
}

impl MockUserRepo {
    pub fn push(&self, user: User) {
        self.users.lock().expect("users mutex poisoned").push(user);
    }
}

#[async_trait]
impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .expect("users mutex poisoned")
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .expect("users mutex poisoned")
            .iter()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .expect("users mutex poisoned")
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn create(&self, user: &User) -> AppResult<User> {
        self.users
            .lock()
            .expect("users mutex poisoned")
            .push(user.clone());
        Ok(user.clone())
    }
}

#[derive(Default)]
pub struct MockVehicleRepo {
    pub vehicles: Mutex<Vec<Vehicle>>,
}

impl MockVehicleRepo {
    pub fn push(&self, vehicle: Vehicle) {
        self.vehicles
            .lock()
            .expect("vehicles mutex poisoned")
            .push(vehicle);
    }

    fn demote_other_primaries(vehicles: &mut [Vehicle], user_id: Uuid, keep_id: Uuid) {
        for vehicle in vehicles
            .iter_mut()
            .filter(|v| v.user_id == user_id && v.id != keep_id)
        {
            vehicle.is_primary = false;
        }
    }
}

#[async_trait]
impl VehicleRepository for MockVehicleRepo {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        Ok(self
            .vehicles
            .lock()
            .expect("vehicles mutex poisoned")
            .iter()
            .find(|vehicle| vehicle.id == id)
            .cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Vehicle>> {
        Ok(self
            .vehicles
            .lock()
            .expect("vehicles mutex poisoned")
            .iter()
            .filter(|vehicle| vehicle.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, vehicle: &Vehicle) -> AppResult<Vehicle> {
        let mut vehicles = self.vehicles.lock().expect("vehicles mutex poisoned");
        if vehicle.is_primary {
            Self::demote_other_primaries(&mut vehicles, vehicle.user_id, vehicle.id);
        }
        vehicles.push(vehicle.clone());
        Ok(vehicle.clone())
    }

    async fn update(&self, vehicle: &Vehicle) -> AppResult<Vehicle> {
        let mut vehicles = self.vehicles.lock().expect("vehicles mutex poisoned");
        if vehicle.is_primary {
            Self::demote_other_primaries(&mut vehicles, vehicle.user_id, vehicle.id);
        }
        if let Some(existing) = vehicles.iter_mut().find(|existing| existing.id == vehicle.id) {
            *existing = vehicle.clone();
        }
        Ok(vehicle.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.vehicles
            .lock()
            .expect("vehicles mutex poisoned")
            .retain(|vehicle| vehicle.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockGarageRepo {
    pub garages: Mutex<Vec<Garage>>,
}

impl MockGarageRepo {
    pub fn push(&self, garage: Garage) {
        self.garages
            .lock()
            .expect("garages mutex poisoned")
            .push(garage);
    }
}

#[async_trait]
impl GarageRepository for MockGarageRepo {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Garage>> {
        Ok(self
            .garages
            .lock()
            .expect("garages mutex poisoned")
            .iter()
            .find(|garage| garage.id == id)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Garage>> {
        Ok(self
            .garages
            .lock()
            .expect("garages mutex poisoned")
            .clone())
    }

    async fn find_by_service(&self, service: &str) -> AppResult<Vec<Garage>> {
        Ok(self
            .garages
            .lock()
            .expect("garages mutex poisoned")
            .iter()
            .filter(|garage| garage.services.iter().any(|s| s == service))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MockAppointmentRepo {
    pub appointments: Mutex<Vec<Appointment>>,
}

impl MockAppointmentRepo {
    pub fn push(&self, appointment: Appointment) {
        self.appointments
            .lock()
            .expect("appointments mutex poisoned")
            .push(appointment);
    }
}

#[async_trait]
impl AppointmentRepository for MockAppointmentRepo {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Appointment>> {
        Ok(self
            .appointments
            .lock()
            .expect("appointments mutex poisoned")
            .iter()
            .find(|appointment| appointment.id == id)
            .cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Appointment>> {
        Ok(self
            .appointments
            .lock()
            .expect("appointments mutex poisoned")
            .iter()
            .filter(|appointment| appointment.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, appointment: &Appointment) -> AppResult<Appointment> {
        self.appointments
            .lock()
            .expect("appointments mutex poisoned")
            .push(appointment.clone());
        Ok(appointment.clone())
    }

    async fn update(&self, appointment: &Appointment) -> AppResult<Appointment> {
        let mut appointments = self
            .appointments
            .lock()
            .expect("appointments mutex poisoned");
        if let Some(existing) = appointments
            .iter_mut()
            .find(|existing| existing.id == appointment.id)
        {
            *existing = appointment.clone();
        }
        Ok(appointment.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.appointments
            .lock()
            .expect("appointments mutex poisoned")
            .retain(|appointment| appointment.id != id);
        Ok(())
    }
}
