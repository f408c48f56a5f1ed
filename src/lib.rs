pub mod bank;
pub mod db;
pub mod models;
pub mod settings;
pub mod telemetry;
pub mod transfer;
