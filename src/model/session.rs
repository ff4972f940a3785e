use serde::{Deserialize, Serialize};

use crate::layout::BoundingBox;
use crate::model::PhotoId;

/// One drag gesture: which photo, and where its box is right now.
///
/// Dimensions are captured when the drag starts; every drag-over tick
/// re-centres the box on the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    pub photo: PhotoId,
    pub bounds: BoundingBox,
}

impl DragSession {
    pub fn start(photo: PhotoId, bounds: BoundingBox) -> Self {
        Self { photo, bounds }
    }

    pub fn photo(&self) -> &PhotoId {
        &self.photo
    }

    pub fn tracked_box(&self) -> BoundingBox {
        self.bounds
    }

    /// Follow the pointer; returns the updated box.
    pub fn track(&mut self, pointer_x: f64, pointer_y: f64) -> BoundingBox {
        self.bounds = BoundingBox::centered_on(self.bounds.size(), pointer_x, pointer_y);
        self.bounds
    }
}
