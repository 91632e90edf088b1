//! Conversions from raw cloud API shapes to normalized models.

pub mod cost;
pub mod ec2;
pub mod ecs;
pub mod tags;
