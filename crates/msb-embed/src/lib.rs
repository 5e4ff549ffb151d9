//! Panel address handling.
//!
//! Turns what the user typed into a navigable address, rewrites it into
//! the address actually embedded when the panel is muted, and hands
//! addresses to the system browser when a site refuses to be framed.

pub mod address;
pub mod external;
pub mod mute;

pub use address::normalize_address;
pub use external::open_external;
pub use mute::{mute_caveat, resolve_embed_address, MediaHost, MUTE_CAVEAT};
