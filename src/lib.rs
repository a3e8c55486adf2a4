pub mod candidate;
pub mod config;
pub mod output;
pub mod scoring;
