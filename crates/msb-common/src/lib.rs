pub mod actions;
pub mod errors;
pub mod id;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, EmbedError, MsbError};
pub use id::SessionId;
pub use types::PanelId;

pub type Result<T> = std::result::Result<T, MsbError>;
