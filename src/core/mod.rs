pub mod app;
pub mod cli;
pub mod command;
pub mod config;
pub mod field;
pub mod inequality;
pub mod output;
pub mod paths;
pub mod presets;
pub mod rows;
pub mod source;
