//! REST API module for spamdetector-rs
//!
//! Provides HTTP endpoints for spam scoring and model evaluation

pub mod handlers;
pub mod server;

pub use server::ApiServer;
