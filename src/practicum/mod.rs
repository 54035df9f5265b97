pub mod client;
pub mod response;
pub mod status;

pub use client::{HomeworkApi, PracticumClient};
pub use response::check_response;
pub use status::{parse_status, HomeworkStatus};
