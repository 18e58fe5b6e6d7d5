//! Mobile view detection adapters

mod hostname;

pub use hostname::{HostnameMobileDetector, StaticMobileView};
