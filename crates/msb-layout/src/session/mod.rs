//! The Session owns the panel row and coordinates splits, closes, zoom,
//! widths and resize gestures.

mod dispatch;
mod operations;
mod resize;
mod types;
mod zoom;

use resize::ResizeDrag;
pub use types::*;
