// src/lib.rs
pub mod config;
pub mod health;
pub mod logging;
pub mod probe;
pub mod smoke;
