pub mod balldontlie;
pub mod config;
pub mod date;
pub mod error;
pub mod handler;
pub mod lookup;
pub mod message;
pub mod model;
pub mod oauth;
pub mod twitter;
