//! Pure point-to-point math on a spherical Earth model.
//!
//! Stateless and infallible: every function is a deterministic computation
//! over [`GeoPoint`](crate::models::GeoPoint) values with no I/O. Degenerate
//! inputs (coincident points, empty boundaries) produce defined outputs
//! rather than NaN. Display geometry (ellipses, arcs, splines) lives here
//! too because it is the same local-planar projection math.

pub mod constants;
pub mod green;
pub mod shapes;
pub mod sphere;

pub use green::{dynamic_green_edges, GreenEdges};
pub use shapes::{
    arc_points, arc_points_default, ellipse_points, ellipse_points_default, smooth_closed_path,
    smooth_closed_path_default,
};
pub use sphere::{bearing, destination, distance, midpoint, wind_adjusted_shot, WindAdjustedShot};
