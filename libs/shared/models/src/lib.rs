pub mod auth;
pub mod booking;
pub mod careers;
pub mod contact;
pub mod error;
pub mod prediction;
