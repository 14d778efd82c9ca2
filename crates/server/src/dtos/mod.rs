pub mod auth;
pub mod clothing_deposit;
pub mod dashboard;
pub mod reservation;
pub mod shift;
pub mod shift_report;
pub mod time_entry;
pub mod user;
