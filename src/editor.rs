//! Drag lifecycle around an album.
//!
//! The host forwards its drag events here: start, a stream of drag-overs,
//! then either a drop or a bare drag end (released outside any page). The
//! editor owns the album, the in-flight session and the marker player.

use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::engine::DropOutcome;
use crate::error::{ConfigError, DropError};
use crate::layout::{BoundingBox, PlacedPhoto, TransitionDirective};
use crate::model::{Album, DragSession, PageId, PhotoId};
use crate::player::TransitionPlayer;

#[derive(Debug, Clone)]
pub struct Editor {
    album: Album,
    config: EngineConfig,
    session: Option<DragSession>,
    player: TransitionPlayer,
}

impl Editor {
    pub fn new(album: Album, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let player = TransitionPlayer::new(config.cleanup_delay_ms);
        Ok(Self { album, config, session: None, player })
    }

    pub fn album(&self) -> &Album {
        &self.album
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn player(&self) -> &TransitionPlayer {
        &self.player
    }

    /// Begin dragging `photo`, whose rendered box is `bounds`. A drag already
    /// in flight is replaced.
    pub fn on_drag_start(&mut self, photo: PhotoId, bounds: BoundingBox) -> Result<(), DropError> {
        if self.album.locate(&photo).is_none() {
            return Err(DropError::InvalidDragState(photo));
        }
        debug!(%photo, "drag started");
        self.session = Some(DragSession::start(photo, bounds));
        Ok(())
    }

    pub fn on_drag_over(&mut self, pointer_x: f64, pointer_y: f64) -> Result<BoundingBox, DropError> {
        let session = self.session.as_mut().ok_or(DropError::NoActiveDrag)?;
        Ok(session.track(pointer_x, pointer_y))
    }

    /// Release over `target`. The session ends whether or not the drop is
    /// accepted.
    pub fn on_drop(
        &mut self,
        target: &PageId,
        boxes: &[PlacedPhoto],
        now_ms: f64,
    ) -> Result<DropOutcome, DropError> {
        let session = self.session.take().ok_or(DropError::NoActiveDrag)?;
        let outcome = self.album.drop_photo(target, &session, boxes, &self.config.grid)?;
        self.player.play(&outcome.transitions, now_ms);
        info!(page = %target, photo = %session.photo(), branch = ?outcome.branch, "photo dropped");
        Ok(outcome)
    }

    /// Drag ended without a drop. Returns when the next markers are due, if
    /// any are still playing.
    pub fn on_drag_end(&mut self) -> Option<f64> {
        if let Some(session) = self.session.take() {
            debug!(photo = %session.photo(), "drag ended without drop");
        }
        self.player.next_deadline()
    }

    pub fn expire_transitions(&mut self, now_ms: f64) -> Vec<TransitionDirective> {
        self.player.expire(now_ms)
    }

    pub fn clear_transitions(&mut self) -> usize {
        self.player.clear()
    }
}
