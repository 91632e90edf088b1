pub mod config_cmd;
pub mod map_cmd;
pub mod output;
pub mod renderer;
