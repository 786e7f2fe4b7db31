//! Platform-independent pieces of the shadow boundary components:
//! the boundary mode, the reset stylesheet and the one-shot attach lifecycle.

mod lifecycle;
mod mode;
mod styles;

pub use lifecycle::{Advance, AttachError, Lifecycle, StyleSync};
pub use mode::{ParseModeError, ShadowMode};
pub use styles::{RESET_STYLES, compose_styles};
