// Drop position resolution.
//
// One strategy per topology class. Each works on the target page's photo
// sequence in place: the dragged photo is taken out of its current slot (when
// it is on this page) and re-inserted, sometimes moving the intersected photo
// as well so the pair trades places.
//
// Slot geometry comes from GridShape. On the default 2x2 page:
//
//     0 | 1        stacked:  0/2, 1/3
//     --+--        same row: 0/1, 2/3
//     2 | 3
//
// Anything the table does not cover falls back to appending the dragged
// photo, so every drop has a defined result.

use serde::Serialize;

use super::GridShape;
use super::topology::{Classification, Topology};
use crate::model::PhotoId;

/// Which reordering was applied. Drives the transition corner table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropBranch {
    /// Sole photo dropped back onto its own page.
    NoOp,
    EmptyPage,
    /// Nothing intersected, or a configuration the table does not cover.
    Fallback,
    SoleSwap,
    FirstHorizontal,
    FirstVertical,
    FirstDiagonal,
    LastAppendNew,
    LastHorizontalPair,
    LastDiagonal,
    LastBottomRow,
    LastVertical,
    /// Dragged from a non-neighbouring slot that shares neither row nor column.
    LastDiagonalSwap,
    AdjacentForward,
    AdjacentBottomRow,
    AdjacentDiagonal,
    AdjacentVerticalDown,
    AdjacentVerticalUp,
    AdjacentInsertNew,
}

/// Reorder `page` for `dragged` released over the classified site.
pub fn resolve(
    page: &mut Vec<PhotoId>,
    dragged: &PhotoId,
    site: &Classification,
    grid: &GridShape,
) -> DropBranch {
    if site.topology == Topology::EmptyPage {
        move_before(page, dragged, None);
        return DropBranch::EmptyPage;
    }

    let Some(slot) = site.target_slot else {
        return fallback(page, dragged);
    };
    let Some(target) = page.get(slot).cloned() else {
        return fallback(page, dragged);
    };
    if &target == dragged {
        return DropBranch::NoOp;
    }

    let branch = match site.topology {
        Topology::EmptyPage => None,
        Topology::SoleAndSourceOverlap => {
            move_before(page, dragged, Some(&target));
            Some(DropBranch::SoleSwap)
        }
        Topology::SourceOverlapsFirst => overlaps_first(page, dragged, &target, slot, site, grid),
        Topology::SourceOverlapsLast => overlaps_last(page, dragged, slot, site, grid),
        Topology::AdjacentOverlap => overlaps_adjacent(page, dragged, &target, slot, site, grid),
    };

    branch.unwrap_or_else(|| fallback(page, dragged))
}

/// Move `dragged` to the end of the page.
pub fn fallback(page: &mut Vec<PhotoId>, dragged: &PhotoId) -> DropBranch {
    move_before(page, dragged, None);
    DropBranch::Fallback
}

fn overlaps_first(
    page: &mut Vec<PhotoId>,
    dragged: &PhotoId,
    target: &PhotoId,
    slot: usize,
    site: &Classification,
    grid: &GridShape,
) -> Option<DropBranch> {
    match site.source_slot {
        // New to the page, or sitting right after the first photo
        None => {
            move_before(page, dragged, Some(target));
            Some(DropBranch::FirstHorizontal)
        }
        Some(source) if source == slot + 1 => {
            move_before(page, dragged, Some(target));
            Some(DropBranch::FirstHorizontal)
        }
        Some(source) if source > slot && grid.stacked(source, slot) => {
            move_before(page, dragged, Some(target));
            let anchor = page.get(source + 1).cloned();
            move_before(page, target, anchor.as_ref());
            Some(DropBranch::FirstVertical)
        }
        Some(_) => {
            move_before(page, dragged, Some(target));
            move_before(page, target, None);
            Some(DropBranch::FirstDiagonal)
        }
    }
}

fn overlaps_last(
    page: &mut Vec<PhotoId>,
    dragged: &PhotoId,
    slot: usize,
    site: &Classification,
    grid: &GridShape,
) -> Option<DropBranch> {
    match site.source_slot {
        None => {
            move_before(page, dragged, None);
            Some(DropBranch::LastAppendNew)
        }
        // The target is last, so appending its predecessor swaps the pair.
        Some(source) if source + 1 == slot => {
            move_before(page, dragged, None);
            let branch = if site.len == 2 {
                DropBranch::LastHorizontalPair
            } else if !grid.same_row(source, slot) {
                DropBranch::LastDiagonal
            } else {
                DropBranch::LastBottomRow
            };
            Some(branch)
        }
        Some(source) if source < slot && grid.stacked(source, slot) => {
            page.swap(source, slot);
            Some(DropBranch::LastVertical)
        }
        // Across the page, e.g. top-left onto bottom-right
        Some(source) => {
            page.swap(source, slot);
            Some(DropBranch::LastDiagonalSwap)
        }
    }
}

fn overlaps_adjacent(
    page: &mut Vec<PhotoId>,
    dragged: &PhotoId,
    target: &PhotoId,
    slot: usize,
    site: &Classification,
    grid: &GridShape,
) -> Option<DropBranch> {
    match site.source_slot {
        None => {
            move_before(page, dragged, Some(target));
            Some(DropBranch::AdjacentInsertNew)
        }
        Some(source) if source + 1 == slot => {
            move_before(page, target, Some(dragged));
            Some(DropBranch::AdjacentForward)
        }
        Some(source) if source == slot + 1 => {
            move_before(page, dragged, Some(target));
            if source + 1 == site.len && grid.same_row(source, slot) {
                return Some(DropBranch::AdjacentBottomRow);
            }
            let anchor = page.get(source + 1).cloned();
            move_before(page, target, anchor.as_ref());
            Some(DropBranch::AdjacentDiagonal)
        }
        Some(source) if grid.stacked(source, slot) => {
            page.swap(source, slot);
            if source < slot {
                Some(DropBranch::AdjacentVerticalDown)
            } else {
                Some(DropBranch::AdjacentVerticalUp)
            }
        }
        Some(_) => None,
    }
}

/// Take `item` out of the page and put it back right before `anchor`, or at
/// the end when there is no anchor. Placing an item before itself is a no-op.
fn move_before(page: &mut Vec<PhotoId>, item: &PhotoId, anchor: Option<&PhotoId>) {
    if anchor == Some(item) {
        return;
    }
    page.retain(|p| p != item);
    let at = anchor
        .and_then(|a| page.iter().position(|p| p == a))
        .unwrap_or(page.len());
    page.insert(at, item.clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::classify;

    fn ids(names: &[&str]) -> Vec<PhotoId> {
        names.iter().map(|n| PhotoId::from(*n)).collect()
    }

    fn names(page: &[PhotoId]) -> Vec<&str> {
        page.iter().map(|p| p.as_str()).collect()
    }

    /// Drop `dragged` over `hit` on `page`, returning the new order and branch.
    fn drop_on(page: &[&str], dragged: &str, hit: &str) -> (Vec<String>, DropBranch) {
        let mut seq = ids(page);
        let dragged = PhotoId::from(dragged);
        let hit = PhotoId::from(hit);
        let site = classify(&seq, &dragged, Some(&hit)).unwrap();
        let branch = resolve(&mut seq, &dragged, &site, &GridShape::default());
        (names(&seq).into_iter().map(String::from).collect(), branch)
    }

    #[test]
    fn test_empty_page_appends() {
        let mut seq = Vec::new();
        let dragged = PhotoId::from("x");
        let site = classify(&seq, &dragged, None).unwrap();
        let branch = resolve(&mut seq, &dragged, &site, &GridShape::default());
        assert_eq!(branch, DropBranch::EmptyPage);
        assert_eq!(names(&seq), vec!["x"]);
    }

    #[test]
    fn test_sole_photo_from_another_page() {
        assert_eq!(drop_on(&["a"], "x", "a"), (vec!["x".into(), "a".into()], DropBranch::SoleSwap));
    }

    #[test]
    fn test_first_horizontal_swap() {
        let (order, branch) = drop_on(&["a", "b"], "b", "a");
        assert_eq!(order, vec!["b", "a"]);
        assert_eq!(branch, DropBranch::FirstHorizontal);
    }

    #[test]
    fn test_first_insert_from_another_page() {
        let (order, branch) = drop_on(&["a", "b", "c"], "x", "a");
        assert_eq!(order, vec!["x", "a", "b", "c"]);
        assert_eq!(branch, DropBranch::FirstHorizontal);
    }

    #[test]
    fn test_first_vertical_swap() {
        let (order, branch) = drop_on(&["a", "b", "c"], "c", "a");
        assert_eq!(order, vec!["c", "b", "a"]);
        assert_eq!(branch, DropBranch::FirstVertical);

        let (order, branch) = drop_on(&["a", "b", "c", "d"], "c", "a");
        assert_eq!(order, vec!["c", "b", "a", "d"]);
        assert_eq!(branch, DropBranch::FirstVertical);
    }

    #[test]
    fn test_first_diagonal_swap() {
        let (order, branch) = drop_on(&["a", "b", "c", "d"], "d", "a");
        assert_eq!(order, vec!["d", "b", "c", "a"]);
        assert_eq!(branch, DropBranch::FirstDiagonal);
    }

    #[test]
    fn test_last_append_from_another_page() {
        let (order, branch) = drop_on(&["a", "b"], "x", "b");
        assert_eq!(order, vec!["a", "b", "x"]);
        assert_eq!(branch, DropBranch::LastAppendNew);
    }

    #[test]
    fn test_last_horizontal_pair() {
        let (order, branch) = drop_on(&["a", "b"], "a", "b");
        assert_eq!(order, vec!["b", "a"]);
        assert_eq!(branch, DropBranch::LastHorizontalPair);
    }

    #[test]
    fn test_last_diagonal_on_three_photo_page() {
        let (order, branch) = drop_on(&["a", "b", "c"], "b", "c");
        assert_eq!(order, vec!["a", "c", "b"]);
        assert_eq!(branch, DropBranch::LastDiagonal);
    }

    #[test]
    fn test_last_bottom_row_swap() {
        let (order, branch) = drop_on(&["a", "b", "c", "d"], "c", "d");
        assert_eq!(order, vec!["a", "b", "d", "c"]);
        assert_eq!(branch, DropBranch::LastBottomRow);
    }

    #[test]
    fn test_last_vertical_swap() {
        let (order, branch) = drop_on(&["a", "b", "c"], "a", "c");
        assert_eq!(order, vec!["c", "b", "a"]);
        assert_eq!(branch, DropBranch::LastVertical);

        let (order, branch) = drop_on(&["a", "b", "c", "d"], "b", "d");
        assert_eq!(order, vec!["a", "d", "c", "b"]);
        assert_eq!(branch, DropBranch::LastVertical);
    }

    #[test]
    fn test_last_diagonal_swap_leaves_others_in_place() {
        let (order, branch) = drop_on(&["a", "b", "c", "d"], "a", "d");
        assert_eq!(order, vec!["d", "b", "c", "a"]);
        assert_eq!(branch, DropBranch::LastDiagonalSwap);

        // Mirror of the first-slot diagonal
        let (order, _) = drop_on(&["a", "b", "c", "d"], "d", "a");
        assert_eq!(order, vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn test_adjacent_forward() {
        let (order, branch) = drop_on(&["a", "b", "c"], "a", "b");
        assert_eq!(order, vec!["b", "a", "c"]);
        assert_eq!(branch, DropBranch::AdjacentForward);

        let (order, _) = drop_on(&["a", "b", "c", "d"], "b", "c");
        assert_eq!(order, vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_adjacent_bottom_row() {
        let (order, branch) = drop_on(&["a", "b", "c", "d"], "d", "c");
        assert_eq!(order, vec!["a", "b", "d", "c"]);
        assert_eq!(branch, DropBranch::AdjacentBottomRow);
    }

    #[test]
    fn test_adjacent_diagonal() {
        let (order, branch) = drop_on(&["a", "b", "c"], "c", "b");
        assert_eq!(order, vec!["a", "c", "b"]);
        assert_eq!(branch, DropBranch::AdjacentDiagonal);

        let (order, branch) = drop_on(&["a", "b", "c", "d"], "c", "b");
        assert_eq!(order, vec!["a", "c", "b", "d"]);
        assert_eq!(branch, DropBranch::AdjacentDiagonal);
    }

    #[test]
    fn test_adjacent_vertical_down() {
        let (order, branch) = drop_on(&["a", "b", "c", "d"], "a", "c");
        assert_eq!(order, vec!["c", "b", "a", "d"]);
        assert_eq!(branch, DropBranch::AdjacentVerticalDown);
    }

    #[test]
    fn test_adjacent_vertical_up_swaps_column() {
        let (order, branch) = drop_on(&["a", "b", "c", "d"], "d", "b");
        assert_eq!(order, vec!["a", "d", "c", "b"]);
        assert_eq!(branch, DropBranch::AdjacentVerticalUp);
    }

    #[test]
    fn test_adjacent_insert_from_another_page() {
        let (order, branch) = drop_on(&["a", "b", "c"], "x", "b");
        assert_eq!(order, vec!["a", "x", "b", "c"]);
        assert_eq!(branch, DropBranch::AdjacentInsertNew);
    }

    #[test]
    fn test_dropping_onto_itself_is_noop() {
        let (order, branch) = drop_on(&["a", "b"], "a", "a");
        assert_eq!(order, vec!["a", "b"]);
        assert_eq!(branch, DropBranch::NoOp);
    }

    #[test]
    fn test_fallback_moves_to_end() {
        let mut seq = ids(&["a", "b", "c"]);
        assert_eq!(fallback(&mut seq, &PhotoId::from("a")), DropBranch::Fallback);
        assert_eq!(names(&seq), vec!["b", "c", "a"]);

        let mut seq = ids(&["x", "y"]);
        fallback(&mut seq, &PhotoId::from("z"));
        assert_eq!(names(&seq), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_move_before_itself_keeps_order() {
        let mut seq = ids(&["a", "b"]);
        let a = PhotoId::from("a");
        move_before(&mut seq, &a, Some(&a));
        assert_eq!(names(&seq), vec!["a", "b"]);
    }
}
