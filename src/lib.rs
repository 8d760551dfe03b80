//! Library exports for reuse in integration tests.
/// Data providers and wire models for the review backend.
pub mod api;
/// Per-user application directories.
pub mod app_dirs;
/// Chart segment shaping.
pub mod charts;
/// On-disk configuration.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Derived dashboard metrics.
pub mod metrics;

pub(crate) mod http_client;
/// File and stdout logging setup.
pub mod logging;
