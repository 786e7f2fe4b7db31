mod shadow_portal;
mod shadow_wrapper;

pub use shadow_portal::ShadowPortal;
pub use shadow_wrapper::ShadowDomWrapper;
