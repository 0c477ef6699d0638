pub mod error;
pub mod tasks;
