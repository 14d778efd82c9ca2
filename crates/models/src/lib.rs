pub mod access;
pub mod role;
pub mod seed;
