pub mod appointments;
pub mod contacts;
pub mod leadconnector;
