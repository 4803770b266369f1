//! Record-level execution: filtering and projection.

pub mod filter;
pub mod projection;

pub use filter::Filter;
pub use projection::Projection;
