//! WASM bindings for photobook-core.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! Inputs and outputs are JSON strings; failures come back as an `error`
//! object in the response and are echoed to the browser console.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::editor::Editor;
use crate::layout::{BoundingBox, PlacedPhoto};
use crate::model::{Album, PageEntry, PageId, Photo, PhotoId};
use crate::output::{DropResponse, ErrorInfo, TransitionOutput, handle_drop_request};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        console_error(&format!("Error serializing response: {}", e));
        r#"{"error":{"code":"serialization","message":"response could not be serialized"}}"#
            .to_string()
    })
}

fn error_json(error: ErrorInfo) -> String {
    console_error(&format!("{}: {}", error.code, error.message));
    to_json(&DropResponse::from_error(error))
}

/// Resolve one drop against an album snapshot. Nothing is retained between
/// calls; the host applies the returned pages itself.
#[wasm_bindgen]
pub fn resolve_drop(request: &str) -> String {
    let response = handle_drop_request(request);
    if let Some(error) = &response.error {
        console_error(&format!("Drop rejected ({}): {}", error.code, error.message));
    }
    to_json(&response)
}

#[derive(Serialize)]
struct LoadedAlbum {
    album: Album,
    photos: Vec<Photo>,
}

/// Build an album from the host's `[{title, images}]` dataset.
#[wasm_bindgen]
pub fn album_from_entries(entries: &str) -> String {
    let entries: Vec<PageEntry> = match serde_json::from_str(entries) {
        Ok(entries) => entries,
        Err(e) => return error_json(ErrorInfo::new("invalid_request", e.to_string())),
    };
    let (album, photos) = Album::from_entries(&entries);
    to_json(&LoadedAlbum { album, photos })
}

/// Stateful editor: owns the album between drags.
#[wasm_bindgen]
pub struct PhotoEditor {
    inner: Editor,
}

#[wasm_bindgen]
impl PhotoEditor {
    /// `album` is a JSON page list; `config` may be empty for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(album: &str, config: &str) -> Result<PhotoEditor, JsError> {
        let album: Album = serde_json::from_str(album)?;
        let config = EngineConfig::from_json(config)?;
        let inner = Editor::new(album, config)?;
        Ok(PhotoEditor { inner })
    }

    /// Returns an empty string on success, or the error response JSON.
    pub fn drag_start(&mut self, photo_id: &str, x: f64, y: f64, width: f64, height: f64) -> String {
        match self
            .inner
            .on_drag_start(PhotoId::from(photo_id), BoundingBox::new(x, y, width, height))
        {
            Ok(()) => String::new(),
            Err(e) => error_json(ErrorInfo::from(&e)),
        }
    }

    pub fn drag_over(&mut self, pointer_x: f64, pointer_y: f64) -> String {
        match self.inner.on_drag_over(pointer_x, pointer_y) {
            Ok(bounds) => to_json(&bounds),
            Err(e) => error_json(ErrorInfo::from(&e)),
        }
    }

    /// `boxes` is a JSON list of `{photo, bounds}` for the target page.
    pub fn drop_on(&mut self, page_id: &str, boxes: &str, now_ms: f64) -> String {
        let boxes: Vec<PlacedPhoto> = match serde_json::from_str(boxes) {
            Ok(boxes) => boxes,
            Err(e) => return error_json(ErrorInfo::new("invalid_request", e.to_string())),
        };
        match self.inner.on_drop(&PageId::from(page_id), &boxes, now_ms) {
            Ok(outcome) => to_json(&DropResponse::from_outcome(&outcome)),
            Err(e) => error_json(ErrorInfo::from(&e)),
        }
    }

    /// Ends the drag. Returns the time the next markers are due, if any.
    pub fn drag_end(&mut self) -> Option<f64> {
        self.inner.on_drag_end()
    }

    /// Markers due by `now_ms`, as JSON; the host removes their classes.
    pub fn expire_transitions(&mut self, now_ms: f64) -> String {
        let expired: Vec<TransitionOutput> = self
            .inner
            .expire_transitions(now_ms)
            .iter()
            .map(TransitionOutput::from)
            .collect();
        to_json(&expired)
    }

    pub fn clear_transitions(&mut self) -> usize {
        self.inner.clear_transitions()
    }

    pub fn album(&self) -> String {
        to_json(self.inner.album())
    }
}
