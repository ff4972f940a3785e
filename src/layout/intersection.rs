// Intersection detection for a drop.
//
// Pages hold at most a handful of photos, so a linear scan in page order is
// all that is needed. The first overlapping photo wins, even if a later one
// overlaps more: ties are broken by page order, not by area.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::BoundingBox;
use crate::model::PhotoId;

/// Rendered box of a photo already placed on a page, as measured by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPhoto {
    pub photo: PhotoId,
    pub bounds: BoundingBox,
}

/// First candidate whose box overlaps `drag_box`.
pub fn find_intersection<'a, I>(drag_box: &BoundingBox, candidates: I) -> Option<&'a PhotoId>
where
    I: IntoIterator<Item = (&'a PhotoId, BoundingBox)>,
{
    candidates
        .into_iter()
        .find(|(_, bounds)| drag_box.overlaps(bounds))
        .map(|(photo, _)| photo)
}

/// Pair each photo of `page` with its host-supplied box, in page order.
/// Photos without a box can't be hit and are left out. The dragged photo
/// stays in: released back over its own slot, it is the hit.
pub fn page_candidates<'a>(
    page: &'a [PhotoId],
    boxes: &[PlacedPhoto],
) -> Vec<(&'a PhotoId, BoundingBox)> {
    let by_photo: HashMap<&PhotoId, BoundingBox> =
        boxes.iter().map(|p| (&p.photo, p.bounds)).collect();

    page.iter()
        .filter_map(|photo| by_photo.get(photo).map(|bounds| (photo, *bounds)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<PhotoId> {
        names.iter().map(|n| PhotoId::from(*n)).collect()
    }

    fn placed(name: &str, x: f64, y: f64) -> PlacedPhoto {
        PlacedPhoto {
            photo: PhotoId::from(name),
            bounds: BoundingBox::new(x, y, 100.0, 100.0),
        }
    }

    #[test]
    fn test_first_overlap_in_page_order_wins() {
        let page = ids(&["a", "b"]);
        let boxes = vec![placed("a", 0.0, 0.0), placed("b", 110.0, 0.0)];
        // Overlaps b far more than a, but a comes first
        let drag = BoundingBox::new(95.0, 0.0, 100.0, 100.0);
        let candidates = page_candidates(&page, &boxes);
        assert_eq!(find_intersection(&drag, candidates), Some(&page[0]));
    }

    #[test]
    fn test_no_overlap() {
        let page = ids(&["a", "b"]);
        let boxes = vec![placed("a", 0.0, 0.0), placed("b", 110.0, 0.0)];
        let drag = BoundingBox::new(0.0, 400.0, 100.0, 100.0);
        let candidates = page_candidates(&page, &boxes);
        assert_eq!(find_intersection(&drag, candidates), None);
    }

    #[test]
    fn test_candidates_follow_page_order_not_box_order() {
        let page = ids(&["a", "b", "c"]);
        let boxes = vec![placed("c", 0.0, 110.0), placed("a", 0.0, 0.0), placed("b", 110.0, 0.0)];
        let candidates = page_candidates(&page, &boxes);
        let order: Vec<&str> = candidates.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unmeasured_photos_are_skipped() {
        let page = ids(&["a", "b", "c"]);
        let boxes = vec![placed("a", 0.0, 0.0), placed("b", 110.0, 0.0)];
        let candidates = page_candidates(&page, &boxes);
        let order: Vec<&str> = candidates.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn test_own_slot_is_a_candidate() {
        let page = ids(&["a", "b", "c"]);
        let boxes = vec![placed("a", 0.0, 0.0), placed("b", 110.0, 0.0), placed("c", 0.0, 110.0)];
        // Released squarely over b's own slot
        let drag = BoundingBox::new(110.0, 0.0, 100.0, 100.0);
        assert_eq!(find_intersection(&drag, page_candidates(&page, &boxes)), Some(&page[1]));
    }
}
