pub mod endpoint;
pub mod runner;
pub mod storage;
