pub mod cluster;
pub mod container;
pub mod cost;
pub mod network;
