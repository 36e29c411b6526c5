pub mod convex_hull;

#[doc(inline)]
pub use convex_hull::{Algorithm, Hull};

#[doc(inline)]
pub use convex_hull::graham_scan::convex_hull;
