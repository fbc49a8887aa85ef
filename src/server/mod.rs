//! HTTP server implementation
//!
//! This module provides the HTTP server and routing functionality.

pub mod builder;
mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use server::HttpServer;
