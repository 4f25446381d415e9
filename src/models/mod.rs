pub mod args;
pub mod result;
pub mod run_config;
