//! Error types.
//!
//! A failed drop never mutates the album; the host treats every `DropError`
//! as a cancelled drag.

use thiserror::Error;

use crate::model::{PageId, PhotoId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropError {
    /// The dragged photo is not placed on any page.
    #[error("dragged photo '{0}' is not on any page")]
    InvalidDragState(PhotoId),

    #[error("unknown target page '{0}'")]
    UnknownPageTarget(PageId),

    #[error("page '{page}' would hold {photos} photos, only {capacity} slots are supported")]
    UnsupportedPageDensity {
        page: PageId,
        photos: usize,
        capacity: usize,
    },

    #[error("no drag in progress")]
    NoActiveDrag,
}

impl DropError {
    /// Stable code for the host.
    pub fn code(&self) -> &'static str {
        match self {
            DropError::InvalidDragState(_) => "invalid_drag_state",
            DropError::UnknownPageTarget(_) => "unknown_page_target",
            DropError::UnsupportedPageDensity { .. } => "unsupported_page_density",
            DropError::NoActiveDrag => "no_active_drag",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlbumError {
    #[error("photo '{0}' appears more than once")]
    DuplicatePhoto(PhotoId),

    #[error("page '{0}' appears more than once")]
    DuplicatePage(PageId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid needs at least one column")]
    NoColumns,

    #[error("grid needs at least one photo slot")]
    NoCapacity,

    #[error("grid capacity {capacity} exceeds the {max} supported slots")]
    CapacityTooLarge { capacity: usize, max: usize },

    #[error("grid capacity {capacity} does not fill {columns} columns evenly")]
    RaggedGrid { capacity: usize, columns: usize },

    #[error("cleanup delay must be a finite, non-negative number of milliseconds")]
    InvalidCleanupDelay,
}
