pub mod config;
pub mod punch;
pub mod status;
