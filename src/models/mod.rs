pub mod day_state;
pub mod entry;
pub mod event_kind;
