//! Tower middleware for the hyper transport.
//!
//! Layers wrap the raw transport through
//! [`HyperClientBuilder::layer`](crate::HyperClientBuilder::layer); the first
//! layer added is the innermost. Any `tower::Layer` over
//! [`BoxedService`](crate::BoxedService) fits, the crate itself ships
//! [`LoggingLayer`].
//!
//! There is no retry layer: one failure surfaces as one error.

mod logging;

pub use logging::{LogLevel, Logging, LoggingLayer};
