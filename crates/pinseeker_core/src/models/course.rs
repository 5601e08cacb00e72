//! Course geometry: tees, greens, holes.
//!
//! Courses are authored by the external course-editor collaborator and are
//! read-only inputs during a round. The engine never mutates a `Course`;
//! the mutating helpers here (`recompute_center`) exist for the authoring
//! side of the boundary.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::models::geo::GeoPoint;

/// One of several tee options on a hole.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeeBox {
    pub id: String,
    pub name: String,
    /// Display color, e.g. `"#ffffff"` for the white tees.
    pub color: String,
    pub location: GeoPoint,
    pub par: u32,
    /// Relative difficulty ranking (1-18) for handicap stroke allocation.
    pub stroke_index: u32,
}

/// Green center plus an optional digitized boundary polygon.
///
/// `boundary` is insertion-ordered (polygon winding matters). When a boundary
/// is authored, `center` is kept at its centroid; otherwise it is an authored
/// fallback point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GreenGeometry {
    pub center: GeoPoint,
    pub boundary: Vec<GeoPoint>,
}

impl GreenGeometry {
    /// Center-only green with no digitized outline.
    pub fn point_only(center: GeoPoint) -> Self {
        Self { center, boundary: Vec::new() }
    }

    /// Arithmetic mean of the boundary points, if any are authored.
    pub fn centroid(&self) -> Option<GeoPoint> {
        if self.boundary.is_empty() {
            return None;
        }
        let n = self.boundary.len() as f64;
        let lat = self.boundary.iter().map(|p| p.lat).sum::<f64>() / n;
        let lng = self.boundary.iter().map(|p| p.lng).sum::<f64>() / n;
        Some(GeoPoint::new(lat, lng))
    }

    /// Re-derive `center` from the boundary after an authoring edit.
    /// No-op when the boundary is empty.
    pub fn recompute_center(&mut self) {
        if let Some(c) = self.centroid() {
            self.center = c;
        }
    }
}

/// A single hole: tee options plus green geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hole {
    /// 1-based, contiguous within a course.
    pub number: u32,
    /// Fallback par when the active tee does not carry one.
    pub par: u32,
    pub tee_boxes: Vec<TeeBox>,
    pub green: GreenGeometry,
}

impl Hole {
    /// The tee a round plays from. First authored tee wins.
    pub fn active_tee(&self) -> Option<&TeeBox> {
        self.tee_boxes.first()
    }

    /// Par as played: the active tee's par, else the hole fallback.
    pub fn effective_par(&self) -> u32 {
        self.active_tee().map(|t| t.par).unwrap_or(self.par)
    }

    pub fn green_center(&self) -> GeoPoint {
        self.green.center
    }
}

/// A complete course. Immutable during a round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub holes: Vec<Hole>,
}

impl Course {
    /// Checks the hole-numbering invariant: 1-based and contiguous.
    pub fn validate(&self) -> Result<()> {
        if self.holes.is_empty() {
            return Err(EngineError::OutOfRange(format!(
                "course '{}' has no holes",
                self.name
            )));
        }
        for (idx, hole) in self.holes.iter().enumerate() {
            let expected = idx as u32 + 1;
            if hole.number != expected {
                return Err(EngineError::OutOfRange(format!(
                    "hole at index {} is numbered {}, expected {}",
                    idx, hole.number, expected
                )));
            }
        }
        Ok(())
    }

    pub fn hole(&self, index: usize) -> Option<&Hole> {
        self.holes.get(index)
    }
}
