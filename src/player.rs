//! Transition marker lifetime.
//!
//! A drop hands back directives; the host attaches their marker classes and
//! plays the animation. Markers must come off again once the animation has
//! settled. The player tracks when each batch expires, driven by timestamps
//! the host passes in (e.g. `performance.now()`), so it never owns a timer.
//!
//! Batches are independent: a second drop before the first batch expires just
//! adds markers with their own deadline.

use serde::Serialize;

use crate::layout::TransitionDirective;
use crate::model::PhotoId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveMarker {
    pub directive: TransitionDirective,
    pub expires_at_ms: f64,
}

#[derive(Debug, Clone, Default)]
pub struct TransitionPlayer {
    cleanup_delay_ms: f64,
    markers: Vec<ActiveMarker>,
}

impl TransitionPlayer {
    pub fn new(cleanup_delay_ms: f64) -> Self {
        Self { cleanup_delay_ms, markers: Vec::new() }
    }

    pub fn play(&mut self, directives: &[TransitionDirective], now_ms: f64) {
        let expires_at_ms = now_ms + self.cleanup_delay_ms;
        self.markers.extend(directives.iter().map(|d| ActiveMarker {
            directive: d.clone(),
            expires_at_ms,
        }));
    }

    /// Remove and return every marker due at `now_ms`.
    pub fn expire(&mut self, now_ms: f64) -> Vec<TransitionDirective> {
        let (due, keep): (Vec<_>, Vec<_>) = self
            .markers
            .drain(..)
            .partition(|m| m.expires_at_ms <= now_ms);
        self.markers = keep;
        due.into_iter().map(|m| m.directive).collect()
    }

    /// Drop every marker. Safe to call any number of times.
    pub fn clear(&mut self) -> usize {
        let n = self.markers.len();
        self.markers.clear();
        n
    }

    pub fn active(&self) -> &[ActiveMarker] {
        &self.markers
    }

    /// Earliest pending deadline, for the host to schedule its next `expire`.
    pub fn next_deadline(&self) -> Option<f64> {
        self.markers
            .iter()
            .map(|m| m.expires_at_ms)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Marker classes currently on `photo`.
    pub fn marker_classes(&self, photo: &PhotoId) -> Vec<String> {
        self.markers
            .iter()
            .filter(|m| &m.directive.photo == photo)
            .map(|m| m.directive.marker_class())
            .collect()
    }
}
