//! Error types for the svy21 crate

use thiserror::Error;

/// Errors raised by the geometry-level reprojection.
///
/// The scalar transforms themselves are total functions and never fail;
/// degenerate inputs flow through IEEE-754 semantics instead.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// Geometry variant the reprojection does not handle
    #[error("Unsupported geometry type: {0}")]
    UnsupportedGeometry(&'static str),
}
