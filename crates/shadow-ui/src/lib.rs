//! Leptos components that render their children inside an isolated shadow root.
//!
//! [`ShadowDomWrapper`] keeps children in the light DOM and projects them
//! through a `<slot>`. [`ShadowPortal`] portals children into a holder node
//! inside the shadow root and keeps the style text in sync with its props.

pub mod boundary;
mod components;
pub mod error;

pub use components::{ShadowDomWrapper, ShadowPortal};
pub use shadow_core::{RESET_STYLES, ShadowMode, compose_styles};
