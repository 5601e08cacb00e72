//! Player-relative green edges.
//!
//! Approach play cares about the green's extent along the line of play
//! (front/back) and across it (left/right), which changes with where the
//! player stands. The boundary is rotated into a frame where the bearing to
//! the green center is "north" and the extreme points are picked out.

use crate::geodesy::constants::green;
use crate::geodesy::sphere::{bearing, destination, distance};
use crate::models::geo::GeoPoint;

/// The four extreme boundary points as seen from the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreenEdges {
    /// Nearest point along the line of play.
    pub front: GeoPoint,
    /// Farthest point along the line of play.
    pub back: GeoPoint,
    pub left: GeoPoint,
    pub right: GeoPoint,
}

/// Extracts front/back/left/right of a green boundary relative to the player.
///
/// With no authored boundary, falls back to a circular approximation around
/// the center ([`green::FALLBACK_DEPTH_RADIUS_M`] deep,
/// [`green::FALLBACK_WIDTH_RADIUS_M`] wide).
pub fn dynamic_green_edges(
    player_position: GeoPoint,
    green_center: GeoPoint,
    green_boundary: &[GeoPoint],
) -> GreenEdges {
    let bearing_to_center = bearing(player_position, green_center);

    if green_boundary.is_empty() {
        return GreenEdges {
            front: destination(green_center, green::FALLBACK_DEPTH_RADIUS_M, bearing_to_center + 180.0),
            back: destination(green_center, green::FALLBACK_DEPTH_RADIUS_M, bearing_to_center),
            left: destination(green_center, green::FALLBACK_WIDTH_RADIUS_M, bearing_to_center - 90.0),
            right: destination(green_center, green::FALLBACK_WIDTH_RADIUS_M, bearing_to_center + 90.0),
        };
    }

    let mut min_depth = f64::INFINITY;
    let mut max_depth = f64::NEG_INFINITY;
    let mut min_width = f64::INFINITY;
    let mut max_width = f64::NEG_INFINITY;
    let mut edges = GreenEdges {
        front: green_boundary[0],
        back: green_boundary[0],
        left: green_boundary[0],
        right: green_boundary[0],
    };

    for &point in green_boundary {
        let dist = distance(green_center, point);
        let relative = (bearing(green_center, point) - bearing_to_center).rem_euclid(360.0);

        // Depth along the line of play (positive = beyond the center),
        // width across it (positive = player's right).
        let depth = dist * relative.to_radians().cos();
        let width = dist * relative.to_radians().sin();

        if depth < min_depth {
            min_depth = depth;
            edges.front = point;
        }
        if depth > max_depth {
            max_depth = depth;
            edges.back = point;
        }
        if width < min_width {
            min_width = width;
            edges.left = point;
        }
        if width > max_width {
            max_width = width;
            edges.right = point;
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_circle_when_no_boundary() {
        // Player due south of the green center.
        let player = GeoPoint::new(51.2530, 6.6109);
        let center = GeoPoint::new(51.2565, 6.6109);
        let edges = dynamic_green_edges(player, center, &[]);

        let front_dist = distance(center, edges.front);
        let back_dist = distance(center, edges.back);
        assert!((front_dist - 13.7).abs() < 0.1, "front radius {} should be 13.7", front_dist);
        assert!((back_dist - 13.7).abs() < 0.1);
        assert!((distance(center, edges.left) - 10.0).abs() < 0.1);
        assert!((distance(center, edges.right) - 10.0).abs() < 0.1);

        // Front sits between player and center.
        assert!(distance(player, edges.front) < distance(player, center));
        assert!(distance(player, edges.back) > distance(player, center));
    }

    #[test]
    fn test_authored_boundary_extremes_follow_player_frame() {
        let center = GeoPoint::new(0.0, 0.0);
        let north = GeoPoint::new(0.0002, 0.0);
        let south = GeoPoint::new(-0.0002, 0.0);
        let east = GeoPoint::new(0.0, 0.0001);
        let west = GeoPoint::new(0.0, -0.0001);
        let boundary = [north, south, east, west];

        // Player approaching from the south: front = south point, right = east.
        let from_south = dynamic_green_edges(GeoPoint::new(-0.01, 0.0), center, &boundary);
        assert_eq!(from_south.front, south);
        assert_eq!(from_south.back, north);
        assert_eq!(from_south.left, west);
        assert_eq!(from_south.right, east);

        // Player approaching from the north: everything flips.
        let from_north = dynamic_green_edges(GeoPoint::new(0.01, 0.0), center, &boundary);
        assert_eq!(from_north.front, north);
        assert_eq!(from_north.back, south);
        assert_eq!(from_north.left, east);
        assert_eq!(from_north.right, west);
    }
}
