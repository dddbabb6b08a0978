pub mod platform;
pub mod storage;
pub mod theme;
pub mod time_local;
