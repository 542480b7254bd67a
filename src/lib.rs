pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod pipeline;
pub mod processor;
pub mod prompt;
pub mod report;
pub mod scanner;
