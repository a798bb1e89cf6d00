pub mod breaks;
pub mod config;
pub mod event;
pub mod init;
pub mod limits;
pub mod render;
