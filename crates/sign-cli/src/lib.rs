pub mod commands;
pub mod host;
pub mod trace_init;
