//! Drop resolution over an album snapshot.
//!
//! `resolve_drop` is pure: it reads the album and returns the pages that
//! change plus the transition directives. `Album::commit` applies the result.
//! Validation happens up front, so a failed drop has nothing to undo.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::DropError;
use crate::layout::{
    DropBranch, GridShape, PlacedPhoto, Topology, TransitionDirective, annotate, classify,
    fallback, find_intersection, page_candidates, resolve,
};
use crate::model::{Album, DragSession, Page, PageId, PhotoId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropOutcome {
    pub branch: DropBranch,
    /// None when nothing was intersected or the drop was a no-op.
    pub topology: Option<Topology>,
    pub intersected: Option<PhotoId>,
    /// Target page first, then the source page when the photo changed pages.
    pub updated_pages: Vec<Page>,
    pub transitions: Vec<TransitionDirective>,
}

/// Resolve `session`'s photo being released over `target`.
///
/// `boxes` are the rendered boxes of the target page's photos; any order.
pub fn resolve_drop(
    album: &Album,
    target: &PageId,
    session: &DragSession,
    boxes: &[PlacedPhoto],
    grid: &GridShape,
) -> Result<DropOutcome, DropError> {
    let dragged = session.photo();

    let target_index = album
        .page_index(target)
        .ok_or_else(|| DropError::UnknownPageTarget(target.clone()))?;
    let (source_index, _) = album
        .locate(dragged)
        .ok_or_else(|| DropError::InvalidDragState(dragged.clone()))?;

    let target_page = &album.pages()[target_index];
    let cross_page = source_index != target_index;
    let occupancy = target_page.len() + usize::from(cross_page);
    if occupancy > grid.capacity {
        return Err(DropError::UnsupportedPageDensity {
            page: target.clone(),
            photos: occupancy,
            capacity: grid.capacity,
        });
    }

    let mut sequence = target_page.photos.clone();
    let mut topology = None;
    let mut intersected = None;

    let branch = if sequence.len() == 1 && &sequence[0] == dragged {
        DropBranch::NoOp
    } else {
        let candidates = page_candidates(&sequence, boxes);
        let hit = find_intersection(&session.tracked_box(), candidates).cloned();
        match classify(&sequence, dragged, hit.as_ref()) {
            // Released back over its own slot
            Some(_) if hit.as_ref() == Some(dragged) => DropBranch::NoOp,
            Some(site) => {
                debug!(
                    page = %target,
                    photo = %dragged,
                    topology = ?site.topology,
                    distance = ?site.distance(),
                    "drop site classified"
                );
                topology = Some(site.topology);
                intersected = hit;
                resolve(&mut sequence, dragged, &site, grid)
            }
            None => fallback(&mut sequence, dragged),
        }
    };

    let mut updated_pages = vec![Page { photos: sequence, ..target_page.clone() }];
    if cross_page {
        let source_page = &album.pages()[source_index];
        let photos = source_page.photos.iter().filter(|p| *p != dragged).cloned().collect();
        updated_pages.push(Page { photos, ..source_page.clone() });
    }

    let transitions = annotate(branch, dragged, intersected.as_ref());
    debug!(page = %target, photo = %dragged, ?branch, "drop resolved");

    Ok(DropOutcome { branch, topology, intersected, updated_pages, transitions })
}

impl Album {
    /// Resolve and commit in one step. The album is untouched on error.
    pub fn drop_photo(
        &mut self,
        target: &PageId,
        session: &DragSession,
        boxes: &[PlacedPhoto],
        grid: &GridShape,
    ) -> Result<DropOutcome, DropError> {
        let outcome = resolve_drop(self, target, session, boxes, grid).inspect_err(|e| {
            warn!(page = %target, photo = %session.photo(), error = %e, "drop rejected");
        })?;
        self.commit(&outcome);
        Ok(outcome)
    }
}
