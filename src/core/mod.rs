pub mod concurrency_controller;
pub mod execute;
pub mod fetch;
pub mod show_result;
pub mod summarize;
