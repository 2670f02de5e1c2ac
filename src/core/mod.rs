pub mod punch;
pub mod status;
pub mod transition;
