pub mod booking;
pub mod contact;

pub use booking::{AppointmentPayload, Booking, BookingRequest, ContactOptions};
pub use contact::{ContactLookup, ContactRequest};
