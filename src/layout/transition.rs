//! Transition corners for the visual hand-off after a drop.
//!
//! Every resolver branch has a fixed entry in the table below: which corner
//! of the page each affected photo ends up in, and whether it fades in or
//! resizes into place. Nothing is derived from geometry.
//!
//! Swaps emit two cues (dragged and intersected). Plain placements emit one,
//! for the dragged photo. A no-op emits none.

use serde::{Deserialize, Serialize};

use super::DropBranch;
use crate::model::PhotoId;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionKind {
    FadeIn,
    ResizeScale,
}

impl TransitionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionKind::FadeIn => "fade-in",
            TransitionKind::ResizeScale => "resize-scale",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Role {
    Dragged,
    Intersected,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cue {
    pub role: Role,
    pub kind: TransitionKind,
    pub corner: Corner,
}

const fn dragged(kind: TransitionKind, corner: Corner) -> Cue {
    Cue { role: Role::Dragged, kind, corner }
}

const fn intersected(kind: TransitionKind, corner: Corner) -> Cue {
    Cue { role: Role::Intersected, kind, corner }
}

use Corner::*;
use TransitionKind::*;

const NONE: &[Cue] = &[];
const ENTER_EMPTY_PAGE: &[Cue] = &[dragged(FadeIn, TopLeft)];
const ENTER_AFTER_LAST: &[Cue] = &[dragged(FadeIn, TopRight)];
const ENTER_BOTTOM_RIGHT: &[Cue] = &[dragged(FadeIn, BottomRight)];
const TOP_ROW_LEFTWARD: &[Cue] = &[dragged(ResizeScale, TopLeft), intersected(FadeIn, TopRight)];
const TOP_ROW_RIGHTWARD: &[Cue] = &[dragged(ResizeScale, TopRight), intersected(FadeIn, TopLeft)];
const BOTTOM_ROW_LEFTWARD: &[Cue] = &[dragged(ResizeScale, BottomLeft), intersected(FadeIn, BottomRight)];
const BOTTOM_ROW_RIGHTWARD: &[Cue] = &[dragged(ResizeScale, BottomRight), intersected(FadeIn, BottomLeft)];
const LEFT_COLUMN_UPWARD: &[Cue] = &[dragged(ResizeScale, BottomLeft), intersected(FadeIn, BottomLeft)];
const LEFT_COLUMN_DOWNWARD: &[Cue] = &[dragged(ResizeScale, BottomLeft), intersected(FadeIn, TopLeft)];
const RIGHT_COLUMN_UPWARD: &[Cue] = &[dragged(ResizeScale, TopRight), intersected(FadeIn, BottomRight)];
const DIAGONAL_TO_TOP_LEFT: &[Cue] = &[dragged(ResizeScale, TopLeft), intersected(FadeIn, BottomRight)];
const DIAGONAL_TO_BOTTOM_RIGHT: &[Cue] = &[dragged(ResizeScale, BottomRight), intersected(FadeIn, TopLeft)];
const DIAGONAL_TO_BOTTOM_LEFT: &[Cue] = &[dragged(ResizeScale, BottomLeft), intersected(FadeIn, TopRight)];
const DIAGONAL_TO_TOP_RIGHT: &[Cue] = &[dragged(ResizeScale, TopRight), intersected(FadeIn, BottomLeft)];

/// Corner table, keyed by branch.
pub fn cues(branch: DropBranch) -> &'static [Cue] {
    match branch {
        DropBranch::NoOp => NONE,
        DropBranch::EmptyPage => ENTER_EMPTY_PAGE,
        DropBranch::Fallback => ENTER_AFTER_LAST,
        DropBranch::LastAppendNew => ENTER_BOTTOM_RIGHT,
        DropBranch::SoleSwap | DropBranch::FirstHorizontal => TOP_ROW_LEFTWARD,
        DropBranch::LastHorizontalPair => TOP_ROW_RIGHTWARD,
        DropBranch::AdjacentBottomRow => BOTTOM_ROW_LEFTWARD,
        DropBranch::LastBottomRow => BOTTOM_ROW_RIGHTWARD,
        DropBranch::FirstVertical => LEFT_COLUMN_UPWARD,
        DropBranch::LastVertical | DropBranch::AdjacentVerticalDown => LEFT_COLUMN_DOWNWARD,
        DropBranch::AdjacentVerticalUp => RIGHT_COLUMN_UPWARD,
        DropBranch::FirstDiagonal => DIAGONAL_TO_TOP_LEFT,
        DropBranch::LastDiagonalSwap => DIAGONAL_TO_BOTTOM_RIGHT,
        DropBranch::LastDiagonal | DropBranch::AdjacentForward => DIAGONAL_TO_BOTTOM_LEFT,
        DropBranch::AdjacentDiagonal | DropBranch::AdjacentInsertNew => DIAGONAL_TO_TOP_RIGHT,
    }
}

/// One photo's animation after a drop.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionDirective {
    pub photo: PhotoId,
    pub kind: TransitionKind,
    pub corner: Corner,
}

impl TransitionDirective {
    /// Marker class the host attaches to the photo, e.g. `fade-in-top-right`.
    pub fn marker_class(&self) -> String {
        format!("{}-{}", self.kind.as_str(), self.corner.as_str())
    }
}

/// Bind the branch's cues to concrete photos.
pub fn annotate(
    branch: DropBranch,
    dragged_photo: &PhotoId,
    intersected_photo: Option<&PhotoId>,
) -> Vec<TransitionDirective> {
    cues(branch)
        .iter()
        .filter_map(|cue| {
            let photo = match cue.role {
                Role::Dragged => dragged_photo,
                Role::Intersected => intersected_photo?,
            };
            Some(TransitionDirective {
                photo: photo.clone(),
                kind: cue.kind,
                corner: cue.corner,
            })
        })
        .collect()
}
