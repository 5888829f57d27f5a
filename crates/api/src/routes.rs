pub mod health;
pub mod message;
pub mod schedule;
pub mod session;
