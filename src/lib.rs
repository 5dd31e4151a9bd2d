pub mod config;
pub mod engine;
pub mod error;
pub mod gallows;
pub mod logging;
pub mod words;
