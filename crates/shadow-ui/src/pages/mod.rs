mod demo_block;
mod portal;
mod wrapper;

pub use demo_block::DemoBlock;
pub use portal::PortalPage;
pub use wrapper::WrapperPage;
