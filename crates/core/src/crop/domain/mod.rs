pub mod crop_config;
pub mod draw_command;
pub mod frame_source;
pub mod region_mapper;
