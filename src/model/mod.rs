// File: ./src/model/mod.rs
pub mod item;
pub mod parser;

pub use item::Appointment;
