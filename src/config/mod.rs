//! Display configuration and per-call overrides

mod display;
mod overrides;

pub use display::{DisplayConfig, DEFAULT_WRAPPER};
pub use overrides::DisplayOverrides;
