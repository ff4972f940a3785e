//! photobook-core: drag-drop photo reordering for paginated print layouts.
//!
//! A photo dragged within or between pages of up to four photos lands in a
//! position decided by where the photo it was released over sits on the
//! page. The result is the new page order plus transition markers telling
//! the renderer how each moved photo should animate.
//!
//! Pipeline for one drop:
//!
//! 1. `layout::find_intersection` picks the first photo the dragged box overlaps.
//! 2. `layout::classify` places that photo on the page (first, last, middle...).
//! 3. `layout::resolve` rearranges the page and names the branch taken.
//! 4. `layout::annotate` maps the branch to its fixed transition directives.
//!
//! `engine::resolve_drop` runs the whole pipeline over an `Album` snapshot;
//! `editor::Editor` wraps it with the drag lifecycle. The wasm exports live in
//! a private module and speak JSON.

pub mod config;
pub mod editor;
pub mod engine;
pub mod error;
pub mod layout;
pub mod model;
pub mod output;
pub mod player;
mod wasm;

pub use config::EngineConfig;
pub use editor::Editor;
pub use engine::{DropOutcome, resolve_drop};
pub use error::{AlbumError, ConfigError, DropError};
pub use model::{Album, DragSession, Page, PageId, Photo, PhotoId};
pub use player::TransitionPlayer;
