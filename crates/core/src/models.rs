pub mod availability;
pub mod message;
pub mod schedule;
