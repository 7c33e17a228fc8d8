//! Host-side site model: fixture-backed content and route resolution.

pub mod routing;
pub mod store;

pub use routing::RouteResolver;
pub use store::{SiteError, SiteStore};
