pub mod status_poller;
pub mod types;
