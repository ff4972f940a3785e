mod album;
mod session;
mod types;

pub use album::Album;
pub use session::DragSession;
pub use types::*;
