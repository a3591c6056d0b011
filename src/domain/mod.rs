pub mod appointment;
pub mod errors;
pub mod garage;
pub mod geo;
pub mod slots;
pub mod user;
pub mod vehicle;

pub use appointment::Appointment;
pub use errors::DomainError;
pub use garage::Garage;
pub use geo::{GeoPoint, NearbyOrder};
pub use slots::{BusinessWindow, TimeSlot};
pub use user::{Role, User};
pub use vehicle::Vehicle;
