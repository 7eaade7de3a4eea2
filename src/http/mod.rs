//! HTTP server module.
//!
//! The server includes:
//! - Plain HTTP serving via a Tokio TCP listener
//! - Graceful shutdown on SIGTERM/SIGINT
//! - Static file serving for the configured asset directory

mod server;
mod shutdown;
pub mod static_files;

pub use server::start_server;
