pub mod auth;
pub mod clothing_deposit;
pub mod health;
pub mod reservation;
pub mod root;
pub mod shift;
pub mod shift_report;
pub mod team;
pub mod time_entry;
pub mod user;
