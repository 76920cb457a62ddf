pub mod events;
pub mod repositories;
pub mod secrets;
