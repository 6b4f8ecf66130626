//! Error types
//!
//! Entity update/draw never fail; errors only surface at construction
//! (configuration, GPU setup) and as recoverable registry bookkeeping.

use thiserror::Error;

/// Registry bookkeeping failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The index was out of range or its entity was already removed this pass.
    #[error("entity index {index} is not live (registry holds {len} slots)")]
    InvalidEntityIndex { index: usize, len: usize },
}

/// Configuration rejected at load or construction time
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A speed, size or period constant that must be strictly positive.
    #[error("`{field}` must be positive and finite, got {value}")]
    OutOfBoundsConfiguration { field: &'static str, value: f64 },
    /// The JSON document could not be parsed.
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// GPU setup failures
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}
