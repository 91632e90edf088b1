pub mod aws;
pub mod config;
pub mod error;
pub mod formatter;
pub mod input;
pub mod mapper;
pub mod models;
