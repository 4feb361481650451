//! Nearest palette color resolution.
//!
//! - [`PreservationPolicy`]: which source attributes survive the remap
//! - [`NearestColorResolver`]: the search over a palette
//! - [`ResolutionCache`]: exact-key memoization of resolved colors

mod cache;
mod policy;
mod resolver;

pub use cache::ResolutionCache;
pub use policy::PreservationPolicy;
pub use resolver::{NearestColorResolver, Resolution};
