pub mod repositories;
pub mod time;
