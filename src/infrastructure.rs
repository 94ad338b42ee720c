pub mod auth;
pub mod db;
pub mod relay;
pub mod storage;
pub mod utils;
