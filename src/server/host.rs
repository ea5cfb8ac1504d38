//! Server host for transport-agnostic API exposure
//!
//! `ServerHost` holds the state every exposure needs: the order service and
//! the resolved configuration. It is built once by the [`ServerBuilder`] and
//! shared by reference with request handlers.
//!
//! [`ServerBuilder`]: super::ServerBuilder

use crate::config::AppConfig;
use crate::core::OrderService;
use axum::http::{HeaderMap, Uri, header};
use std::sync::Arc;

/// Host context containing all service state
pub struct ServerHost {
    /// Resolved configuration
    pub config: Arc<AppConfig>,

    /// Order storage
    pub order_service: Arc<dyn OrderService>,
}

impl ServerHost {
    pub fn new(order_service: Arc<dyn OrderService>, config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            order_service,
        }
    }

    /// Absolute prefix for generated links, empty when links are relative
    pub fn public_url(&self) -> &str {
        self.config
            .server
            .public_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .unwrap_or("")
    }

    /// Scheme and authority that generated links point at
    ///
    /// Uses the configured public URL when set, otherwise the request's
    /// `Host` header (scheme from `X-Forwarded-Proto`, default `http`), then
    /// the authority of an absolute request URI. Empty when none is known.
    pub fn origin(&self, headers: &HeaderMap, uri: &Uri) -> String {
        let public_url = self.public_url();
        if !public_url.is_empty() {
            return public_url.to_string();
        }

        let host = headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .or_else(|| uri.authority().map(|a| a.as_str()));
        let Some(host) = host else {
            return String::new();
        };

        let scheme = headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .or_else(|| uri.scheme_str())
            .unwrap_or("http");

        format!("{scheme}://{host}")
    }
}
