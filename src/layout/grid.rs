//! Page grid shape.
//!
//! Pages render their photos row-major into a fixed number of columns
//! (top-left, top-right, bottom-left, bottom-right for the default 2x2 page).
//! The reordering rules only ever ask two questions of the grid: are these
//! slots stacked in one column, and do they share a row.

use serde::{Deserialize, Serialize};

use super::{BoundingBox, SizeF};
use crate::error::ConfigError;

/// Largest page the reordering table is defined for.
pub const MAX_SUPPORTED_SLOTS: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridShape {
    /// Photos per row.
    pub columns: usize,
    /// Photo slots per page.
    pub capacity: usize,
}

impl Default for GridShape {
    fn default() -> Self {
        Self { columns: 2, capacity: MAX_SUPPORTED_SLOTS }
    }
}

impl GridShape {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        if self.capacity == 0 {
            return Err(ConfigError::NoCapacity);
        }
        if self.capacity > MAX_SUPPORTED_SLOTS {
            return Err(ConfigError::CapacityTooLarge {
                capacity: self.capacity,
                max: MAX_SUPPORTED_SLOTS,
            });
        }
        if self.capacity % self.columns != 0 {
            return Err(ConfigError::RaggedGrid {
                capacity: self.capacity,
                columns: self.columns,
            });
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.capacity.div_ceil(self.columns.max(1))
    }

    pub fn row(&self, slot: usize) -> usize {
        slot / self.columns.max(1)
    }

    pub fn column(&self, slot: usize) -> usize {
        slot % self.columns.max(1)
    }

    /// Same column, adjacent rows: one slot sits directly above the other.
    pub fn stacked(&self, a: usize, b: usize) -> bool {
        a.abs_diff(b) == self.columns
    }

    pub fn same_row(&self, a: usize, b: usize) -> bool {
        self.row(a) == self.row(b)
    }

    /// Rendered box of `slot` when cells of `cell` size are packed
    /// left-to-right, top-to-bottom from `origin` with `gap` between them.
    pub fn slot_box(&self, origin: (f64, f64), cell: SizeF, gap: f64, slot: usize) -> BoundingBox {
        let col = self.column(slot) as f64;
        let row = self.row(slot) as f64;
        BoundingBox {
            x: origin.0 + col * (cell.width + gap),
            y: origin.1 + row * (cell.height + gap),
            width: cell.width,
            height: cell.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_two_by_two() {
        let grid = GridShape::default();
        assert_eq!(grid.rows(), 2);
        assert!(grid.validate().is_ok());
    }

    #[test]
    fn test_stacked_slots() {
        let grid = GridShape::default();
        assert!(grid.stacked(0, 2));
        assert!(grid.stacked(3, 1));
        assert!(!grid.stacked(0, 1));
        assert!(!grid.stacked(0, 3));
        assert!(!grid.stacked(1, 2));
    }

    #[test]
    fn test_same_row() {
        let grid = GridShape::default();
        assert!(grid.same_row(0, 1));
        assert!(grid.same_row(2, 3));
        assert!(!grid.same_row(1, 2));
        assert!(!grid.same_row(0, 2));
    }

    #[test]
    fn test_single_column_stacks_neighbours() {
        let grid = GridShape { columns: 1, capacity: 4 };
        assert!(grid.stacked(1, 2));
        assert!(!grid.same_row(1, 2));
    }

    #[test]
    fn test_slot_boxes_pack_row_major() {
        let grid = GridShape::default();
        let cell = SizeF { width: 100.0, height: 80.0 };
        let b3 = grid.slot_box((20.0, 20.0), cell, 10.0, 3);
        assert_eq!(b3, BoundingBox::new(130.0, 110.0, 100.0, 80.0));
        let b0 = grid.slot_box((20.0, 20.0), cell, 10.0, 0);
        let b1 = grid.slot_box((20.0, 20.0), cell, 10.0, 1);
        assert!(!b0.overlaps(&b1));
    }

    #[test]
    fn test_validate_rejects_bad_shapes() {
        assert_eq!(
            GridShape { columns: 0, capacity: 4 }.validate(),
            Err(ConfigError::NoColumns)
        );
        assert_eq!(
            GridShape { columns: 2, capacity: 0 }.validate(),
            Err(ConfigError::NoCapacity)
        );
        assert_eq!(
            GridShape { columns: 2, capacity: 6 }.validate(),
            Err(ConfigError::CapacityTooLarge { capacity: 6, max: 4 })
        );
        assert_eq!(
            GridShape { columns: 3, capacity: 4 }.validate(),
            Err(ConfigError::RaggedGrid { capacity: 4, columns: 3 })
        );
    }
}
