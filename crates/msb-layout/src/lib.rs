pub mod commands;
pub mod error;
pub mod layout;
pub mod panel;
pub mod session;
pub mod split;

pub use commands::LayoutCommand;
pub use error::LayoutError;
pub use layout::{compute_even_widths, LayoutMetrics};
pub use panel::{Panel, PanelUpdate};
pub use session::Session;
pub use split::SplitCount;
