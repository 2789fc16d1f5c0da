//! Output types for frontend consumption.
//!
//! These structs are serialized to JSON at the wasm boundary and sent to
//! the frontend for rendering the cloud.

use crate::layout::{PointI, RectI, SizeI};
use serde::Serialize;

/// Error detail attached to a cloud output.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    /// Index of the tag request that failed; absent for request-level
    /// errors such as malformed JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_index: Option<usize>,
}

/// The laid-out cloud sent to the frontend.
///
/// Tags appear in placement order. When `error` is set, `tags` holds
/// whatever was placed before the failure.
#[derive(Debug, Clone, Serialize)]
pub struct CloudOutput {
    pub center: PointI,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<RectI>,
    pub bounds: SizeI,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}
