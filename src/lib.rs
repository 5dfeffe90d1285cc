pub mod aggregate;
pub mod app;
pub mod canvas;
pub mod cli;
pub mod config;
pub mod cpu_monitor;
pub mod system_info;
pub mod ui;
