pub mod arp;
pub mod inspect;
pub mod system;
pub mod vendors;

pub use inspect::{MacReport, inspect};
pub use vendors::{VendorRegistry, lookup};
