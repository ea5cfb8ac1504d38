//! Server module for building the HTTP service
//!
//! This module provides a `ServerBuilder` that wires the order service and
//! configuration into a `ServerHost`, then exposes it over REST.

pub mod builder;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use host::ServerHost;
