pub mod checked;
pub mod config;
pub mod data_storage;
pub mod messages;
pub mod storage;
pub mod task;
pub mod view;
