// Topology classification.
//
// Where does the intersected photo sit on the target page, and is the
// dragged photo already on that page? The answer picks the resolver strategy.

use serde::Serialize;

use crate::model::PhotoId;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// Target page holds no photos.
    EmptyPage,
    /// Intersected photo is the only one on the page.
    SoleAndSourceOverlap,
    /// Intersected photo has no predecessor but has a successor.
    SourceOverlapsFirst,
    /// Intersected photo has a predecessor but no successor.
    SourceOverlapsLast,
    /// Intersected photo has both.
    AdjacentOverlap,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Classification {
    pub topology: Topology,
    /// Slot of the intersected photo. None only for an empty page.
    pub target_slot: Option<usize>,
    /// Slot of the dragged photo when it is already on the target page.
    pub source_slot: Option<usize>,
    pub len: usize,
}

impl Classification {
    pub fn source_on_page(&self) -> bool {
        self.source_slot.is_some()
    }

    /// Signed slot distance from the intersected photo to the dragged one.
    pub fn distance(&self) -> Option<isize> {
        let source = self.source_slot? as isize;
        let target = self.target_slot? as isize;
        Some(source - target)
    }
}

/// Classify a drop onto `page`.
///
/// Returns None when nothing was intersected on a non-empty page (or the
/// intersected photo is not on this page); the caller falls back.
pub fn classify(
    page: &[PhotoId],
    dragged: &PhotoId,
    intersected: Option<&PhotoId>,
) -> Option<Classification> {
    let source_slot = page.iter().position(|p| p == dragged);

    if page.is_empty() {
        return Some(Classification {
            topology: Topology::EmptyPage,
            target_slot: None,
            source_slot,
            len: 0,
        });
    }

    let target = intersected?;
    let slot = page.iter().position(|p| p == target)?;
    let has_prev = slot > 0;
    let has_next = slot + 1 < page.len();

    let topology = match (has_prev, has_next) {
        (false, false) => Topology::SoleAndSourceOverlap,
        (false, true) => Topology::SourceOverlapsFirst,
        (true, false) => Topology::SourceOverlapsLast,
        (true, true) => Topology::AdjacentOverlap,
    };

    Some(Classification {
        topology,
        target_slot: Some(slot),
        source_slot,
        len: page.len(),
    })
}
