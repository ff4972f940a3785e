//! Request and response types for the host.
//!
//! Everything crossing the wasm boundary is JSON. A response always carries
//! either the drop result or an `error`, never both.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::engine::{DropOutcome, resolve_drop};
use crate::error::DropError;
use crate::layout::{DropBranch, PlacedPhoto, Topology, TransitionDirective};
use crate::model::{Album, DragSession, Page, PageId, PhotoId};

/// One stateless drop: the whole album snapshot plus the gesture.
#[derive(Debug, Clone, Deserialize)]
pub struct DropRequest {
    pub album: Album,
    pub target_page: PageId,
    pub session: DragSession,
    /// Rendered boxes of the target page's photos.
    #[serde(default)]
    pub boxes: Vec<PlacedPhoto>,
    #[serde(default)]
    pub config: EngineConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionOutput {
    pub photo: PhotoId,
    pub kind: String,
    pub corner: String,
    /// Marker class to add to the photo's element, e.g. `fade-in-top-left`.
    pub class_name: String,
}

impl From<&TransitionDirective> for TransitionOutput {
    fn from(d: &TransitionDirective) -> Self {
        Self {
            photo: d.photo.clone(),
            kind: d.kind.as_str().to_string(),
            corner: d.corner.as_str().to_string(),
            class_name: d.marker_class(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorInfo {
    /// Stable, machine-readable code, e.g. `unknown_page_target`.
    pub code: String,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self { code: code.to_string(), message: message.into() }
    }
}

impl From<&DropError> for ErrorInfo {
    fn from(e: &DropError) -> Self {
        Self::new(e.code(), e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DropResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<Page>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<DropBranch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topology: Option<Topology>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intersected: Option<PhotoId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transitions: Vec<TransitionOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl DropResponse {
    pub fn from_outcome(outcome: &DropOutcome) -> Self {
        Self {
            pages: outcome.updated_pages.clone(),
            branch: Some(outcome.branch),
            topology: outcome.topology,
            intersected: outcome.intersected.clone(),
            transitions: outcome.transitions.iter().map(TransitionOutput::from).collect(),
            error: None,
        }
    }

    pub fn from_error(error: ErrorInfo) -> Self {
        Self { error: Some(error), ..Default::default() }
    }
}

/// Parse and resolve a stateless drop request.
pub fn handle_drop_request(json: &str) -> DropResponse {
    let request: DropRequest = match serde_json::from_str(json) {
        Ok(r) => r,
        Err(e) => return DropResponse::from_error(ErrorInfo::new("invalid_request", e.to_string())),
    };
    if let Err(e) = request.config.validate() {
        return DropResponse::from_error(ErrorInfo::new("invalid_config", e.to_string()));
    }
    match resolve_drop(
        &request.album,
        &request.target_page,
        &request.session,
        &request.boxes,
        &request.config.grid,
    ) {
        Ok(outcome) => DropResponse::from_outcome(&outcome),
        Err(e) => DropResponse::from_error(ErrorInfo::from(&e)),
    }
}
