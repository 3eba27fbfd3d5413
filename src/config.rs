//! Service configuration.
//!
//! Every knob lives in one [`ServiceConfig`] struct built via its builder, so
//! configs are trivial to share across handlers, serialise for logging, and
//! diff between two deployments.

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};

/// Maximum upload size accepted by the service: 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Configuration for the HTTP conversion service.
///
/// Built via [`ServiceConfig::builder()`] or [`ServiceConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2docx::ServiceConfig;
///
/// let config = ServiceConfig::builder()
///     .bind_addr("127.0.0.1:9000")
///     .max_upload_bytes(5 * 1024 * 1024)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Socket address the server listens on. Default: `0.0.0.0:8080`.
    pub bind_addr: String,

    /// Upload size ceiling in bytes. Default: 10 MiB.
    ///
    /// Enforced by the HTTP layer (transport body limit plus an explicit
    /// handler check); the conversion core itself never re-checks it.
    pub max_upload_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServiceConfig {
    /// Create a new builder for `ServiceConfig`.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ServiceConfig`].
#[derive(Debug)]
pub struct ServiceConfigBuilder {
    config: ServiceConfig,
}

impl ServiceConfigBuilder {
    pub fn bind_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.bind_addr = addr.into();
        self
    }

    pub fn max_upload_bytes(mut self, bytes: usize) -> Self {
        self.config.max_upload_bytes = bytes;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ServiceConfig, ConvertError> {
        let c = &self.config;
        if c.max_upload_bytes == 0 {
            return Err(ConvertError::InvalidConfig(
                "max_upload_bytes must be ≥ 1".into(),
            ));
        }
        if c.bind_addr.is_empty() {
            return Err(ConvertError::InvalidConfig("bind_addr is empty".into()));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ServiceConfig::default();
        assert_eq!(c.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(c.bind_addr, "0.0.0.0:8080");
    }

    #[test]
    fn builder_overrides() {
        let c = ServiceConfig::builder()
            .bind_addr("127.0.0.1:9000")
            .max_upload_bytes(1024)
            .build()
            .unwrap();
        assert_eq!(c.bind_addr, "127.0.0.1:9000");
        assert_eq!(c.max_upload_bytes, 1024);
    }

    #[test]
    fn zero_upload_limit_rejected() {
        let result = ServiceConfig::builder().max_upload_bytes(0).build();
        assert!(result.is_err());
    }
}
