// Drop layout for photobook pages.
//
// Decides where a dragged photo lands when it is released over a page, and
// how the two photos involved hand off visually.
//
// Pipeline:
// - intersection: first placed photo (page order) overlapping the dragged box
// - topology: where that photo sits on the page, and whether the dragged
//   photo is already there
// - resolver: one reordering strategy per topology class
// - transition: static corner table per resolver branch
//
// Everything here is pure: page sequences go in, a new sequence and a branch
// tag come out. The engine owns validation and commits.

use serde::{Deserialize, Serialize};

mod grid;
mod intersection;
mod resolver;
mod topology;
mod transition;

pub use grid::{GridShape, MAX_SUPPORTED_SLOTS};
pub use intersection::{PlacedPhoto, find_intersection, page_candidates};
pub use resolver::{DropBranch, fallback, resolve};
pub use topology::{Classification, Topology, classify};
pub use transition::{
    Corner, Cue, Role, TransitionDirective, TransitionKind, annotate, cues,
};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeF {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned box in page pixels, top-left origin.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }

    pub fn size(&self) -> SizeF {
        SizeF { width: self.width, height: self.height }
    }

    /// Box of `size` whose centre sits on the pointer.
    pub fn centered_on(size: SizeF, pointer_x: f64, pointer_y: f64) -> Self {
        Self {
            x: pointer_x - size.width / 2.0,
            y: pointer_y - size.height / 2.0,
            width: size.width,
            height: size.height,
        }
    }

    /// Strict overlap; boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

pub fn overlaps(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.overlaps(b)
}
